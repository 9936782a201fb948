//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Immutable 3x3 tic-tac-toe board.
///
/// Boards are plain values: every move produces a fresh `Board` and leaves
/// the one it came from untouched. The only ways to obtain a board are
/// [`initial_state`](crate::initial_state), [`result`](crate::result) and
/// parsing (text or serde), so every board a caller holds is reachable by
/// legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::parse::RawBoard")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of rows (and columns).
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        Action::new(row, col)
            .index()
            .map(|index| self.squares[index])
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Counts occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of the board with `player`'s mark at `action`.
    ///
    /// Callers validate the action first.
    pub(crate) fn place(mut self, action: Action, player: Player) -> Self {
        self.squares[action.row() * Self::SIZE + action.col()] = Square::Occupied(player);
        self
    }

    /// Builds a board from raw squares. Used by the parser after validation.
    pub(crate) fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their cell number (1-9) so a human can pick one.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                let pos = row * Self::SIZE + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// X has three in a row.
    #[display("X wins")]
    XWins,
    /// O has three in a row.
    #[display("O wins")]
    OWins,
    /// Full board, no line.
    #[display("Draw")]
    Draw,
    /// Moves remain and nobody has won.
    #[display("In progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
