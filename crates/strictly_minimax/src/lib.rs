//! Command-line driver for the `strictly_tictactoe` minimax solver.
//!
//! The driver never reaches into the solver's internals: it renders boards,
//! collects moves from humans and hands everything else to the public
//! operations of `strictly_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
mod players;

pub use config::{ConfigError, DriverConfig};
pub use orchestrator::{GameEvent, Match};
pub use players::{Contestant, EnginePlayer, HumanPlayer, parse_action};
