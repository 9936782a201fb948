//! Contestant backed by the minimax solver.

use super::Contestant;
use anyhow::Result;
use strictly_tictactoe::{Action, Board, decide};
use tracing::{debug, instrument};

/// Plays the optimal move every turn.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for EnginePlayer {
    #[instrument(skip(self, board), fields(engine = %self.name))]
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let decision = decide(board).ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(action = %decision.action, value = decision.value, "Engine chose move");
        Ok(decision.action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
