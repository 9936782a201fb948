//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_tictactoe::{Board, Player};

/// Strictly Minimax - perfect tic-tac-toe by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Perfect tic-tac-toe by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the driver config file (optional)
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a board
    BestMove {
        /// Board as nine cells, e.g. "XX.O....." (X, O, and . for empty)
        #[arg(short, long)]
        board: Board,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<Board>,
    },

    /// Play against the engine on the terminal
    Play {
        /// Mark to play as (overrides the config file)
        #[arg(long)]
        human: Option<Player>,
    },
}
