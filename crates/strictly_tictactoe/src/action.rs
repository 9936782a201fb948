//! First-class action types for tic-tac-toe.
//!
//! An action is the coordinate a player wants to mark. It carries raw
//! coordinates so that a bad request from a driver can be represented and
//! then rejected by [`result`](crate::result).

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the board.
///
/// Ordering is row-major, which is the order [`actions`](crate::actions)
/// enumerates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Creates an action. Coordinates are not checked here.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the row-major index (0-8), or `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        if self.row < Board::SIZE && self.col < Board::SIZE {
            Some(self.row * Board::SIZE + self.col)
        } else {
            None
        }
    }

    /// Creates the action for a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Board::SIZE * Board::SIZE)
            .then(|| Self::new(index / Board::SIZE, index % Board::SIZE))
    }

    /// Creates the action for a human cell number (1-9), as shown by
    /// [`Board::display`].
    pub fn from_cell_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned by [`result`](crate::result) for an illegal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The coordinate is outside the 3x3 grid.
    #[display("Action {} is off the board", _0)]
    OutOfBounds(Action),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Action),
}

impl InvalidAction {
    /// Returns the rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::OutOfBounds(action) | InvalidAction::Occupied(action) => *action,
        }
    }
}

impl std::error::Error for InvalidAction {}
