//! Text form of a board.
//!
//! A board is nine cells in row-major order: `X`/`x`, `O`/`o`, and `.`, `_`
//! or a cell number `1`-`9` for an empty square. Whitespace and the grid
//! characters `|`, `+`, `-` and `/` are ignored, so the output of
//! [`Board::display`] parses back to the same board.
//!
//! Parsing only accepts boards that legal play can reach. Deserialized boards
//! go through the same check.

use crate::rules::win::line_owners;
use crate::types::{Board, Player, Square};
use serde::Deserialize;
use std::str::FromStr;
use tracing::instrument;

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(char),

    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// X must have the same number of marks as O, or one more.
    #[display("Board has {} X marks and {} O marks", x, o)]
    UnbalancedMarks {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// Both players have three in a row.
    #[display("Board has winning lines for both players")]
    TwoWinners,

    /// The winner's line could not have been completed on their own turn.
    #[display("Player {} has won but the mark counts say play continued", _0)]
    PlayAfterWin(Player),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument(err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'X' | 'x' => squares.push(Square::Occupied(Player::X)),
                'O' | 'o' => squares.push(Square::Occupied(Player::O)),
                '.' | '_' | '1'..='9' => squares.push(Square::Empty),
                '|' | '+' | '-' | '/' => {}
                c if c.is_whitespace() => {}
                c => return Err(BoardParseError::InvalidCharacter(c)),
            }
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongCellCount(cells.len()))?;
        let board = Board::from_squares(squares);
        check_reachable(&board)?;
        Ok(board)
    }
}

/// Unchecked serde form of a [`Board`].
#[derive(Deserialize)]
pub(crate) struct RawBoard {
    squares: [Square; 9],
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Board::from_squares(raw.squares);
        check_reachable(&board)?;
        Ok(board)
    }
}

/// Rejects boards legal play from the empty board cannot produce.
fn check_reachable(board: &Board) -> Result<(), BoardParseError> {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    if x != o && x != o + 1 {
        return Err(BoardParseError::UnbalancedMarks { x, o });
    }

    let mut owners = line_owners(board);
    let Some(winner) = owners.next() else {
        return Ok(());
    };
    if owners.any(|other| other != winner) {
        return Err(BoardParseError::TwoWinners);
    }

    // The winner moved last: X leads by one after an X win, counts are even
    // after an O win.
    let moved_last = match winner {
        Player::X => x == o + 1,
        Player::O => x == o,
    };
    if moved_last {
        Ok(())
    } else {
        Err(BoardParseError::PlayAfterWin(winner))
    }
}
