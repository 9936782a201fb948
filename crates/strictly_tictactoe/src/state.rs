//! Board transitions: whose turn it is, which moves are legal, and what a
//! move produces.

use crate::action::{Action, InvalidAction};
use crate::types::{Board, Player, Square};
use std::collections::BTreeSet;
use tracing::debug;

/// Returns the empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves first and turns alternate, so X is to act exactly when both
/// players have the same number of marks.
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every legal action: the coordinates of all empty squares.
///
/// The set is empty iff the board is full. Iteration is row-major, but
/// callers should not rely on any particular order.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .filter_map(|(index, _)| Action::from_index(index))
        .collect()
}

/// Returns the board produced by the player to act marking `action`.
///
/// The input board is not modified.
///
/// # Errors
///
/// [`InvalidAction::OutOfBounds`] when the coordinate is off the grid and
/// [`InvalidAction::Occupied`] when the square is taken.
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    let index = action.index().ok_or_else(|| {
        debug!(%action, "Rejected off-board action");
        InvalidAction::OutOfBounds(action)
    })?;

    if board.squares()[index] != Square::Empty {
        debug!(%action, "Rejected action on occupied square");
        return Err(InvalidAction::Occupied(action));
    }

    Ok(board.place(action, player(board)))
}

/// Legal actions paired with the boards they lead to, in enumeration order.
///
/// Equivalent to calling [`result`] for each member of [`actions`], without
/// re-validating moves that are legal by construction.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + use<> {
    let board = *board;
    let mark = player(&board);
    actions(&board)
        .into_iter()
        .map(move |action| (action, board.place(action, mark)))
}
