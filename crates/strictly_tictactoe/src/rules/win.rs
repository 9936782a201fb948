//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::warn;

/// Winning lines as row-major indices, scanned in this order: rows, then
/// columns, then diagonals.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Yields the owner of every completed line, in scan order.
pub(crate) fn line_owners(board: &Board) -> impl Iterator<Item = Player> + '_ {
    let squares = board.squares();
    LINES.iter().filter_map(move |&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first completed line in scan order, or `None`.
/// A board with lines for both players cannot arise from legal play; debug
/// builds assert on it, release builds return the scan-order answer.
pub fn winner(board: &Board) -> Option<Player> {
    let mut owners = line_owners(board);
    let first = owners.next()?;
    let contested = owners.any(|other| other != first);
    if contested {
        warn!(board = %board.display(), "Board has winning lines for both players");
    }
    debug_assert!(!contested, "board has winning lines for both players");
    Some(first)
}
