//! Game orchestration between contestants.

use crate::players::Contestant;
use anyhow::Result;
use strictly_tictactoe::{Action, Board, Outcome, Player, initial_state, outcome, player, result};
use tracing::{debug, info, instrument};

/// Events emitted while a match runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board updated (also sent once before the first move).
    StateChanged(Board),
    /// Move was made.
    MoveMade {
        /// Name of the contestant who moved.
        name: String,
        /// Mark they placed.
        mark: Player,
        /// Where they placed it.
        action: Action,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winning contestant, if any.
        winner: Option<String>,
    },
}

/// Runs a game between two contestants.
pub struct Match {
    board: Board,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
}

impl Match {
    /// Creates a match from the empty board.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>) -> Self {
        Self::from_board(initial_state(), player_x, player_o)
    }

    /// Creates a match continuing from `board`.
    pub fn from_board(
        board: Board,
        player_x: Box<dyn Contestant>,
        player_o: Box<dyn Contestant>,
    ) -> Self {
        Self {
            board,
            player_x,
            player_o,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the game is over, reporting each step to `on_event`.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent)) -> Result<Outcome> {
        info!("Starting match");
        on_event(&GameEvent::StateChanged(self.board));

        loop {
            let status = outcome(&self.board);
            if status.is_over() {
                let winner = status.winner().map(|mark| self.contestant(mark).name().to_string());
                info!(outcome = %status, ?winner, "Match finished");
                on_event(&GameEvent::GameOver {
                    outcome: status,
                    winner,
                });
                return Ok(status);
            }

            let board = self.board;
            let mark = player(&board);
            let contestant = self.contestant_mut(mark);
            debug!(player = %contestant.name(), %mark, "Waiting for move");
            let action = contestant.choose(&board)?;
            let name = contestant.name().to_string();

            self.board = result(&board, action)?;

            on_event(&GameEvent::MoveMade { name, mark, action });
            on_event(&GameEvent::StateChanged(self.board));
        }
    }

    fn contestant(&self, mark: Player) -> &dyn Contestant {
        match mark {
            Player::X => self.player_x.as_ref(),
            Player::O => self.player_o.as_ref(),
        }
    }

    fn contestant_mut(&mut self, mark: Player) -> &mut dyn Contestant {
        match mark {
            Player::X => self.player_x.as_mut(),
            Player::O => self.player_o.as_mut(),
        }
    }
}
