//! Contestant trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::{HumanPlayer, parse_action};

use anyhow::Result;
use strictly_tictactoe::{Action, Board};

/// Anything that can pick moves in a match.
pub trait Contestant {
    /// Chooses an action for the player to act on `board`.
    ///
    /// Only called on boards that are not terminal.
    fn choose(&mut self, board: &Board) -> Result<Action>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
