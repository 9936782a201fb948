//! Pure tic-tac-toe game logic with an exhaustive minimax solver.
//!
//! # Architecture
//!
//! - **Board model**: [`initial_state`], [`player`], [`actions`], [`result`]
//! - **Terminal evaluation**: [`winner`], [`terminal`], [`utility`], [`outcome`]
//! - **Search**: [`minimax`], [`decide`], [`game_value`]
//!
//! Boards are immutable `Copy` values. Every function here is pure, so any
//! number of threads may search the same or different boards at once.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), strictly_tictactoe::InvalidAction>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod parse;
mod rules;
mod search;
mod state;
mod types;

pub use action::{Action, InvalidAction};
pub use parse::BoardParseError;
pub use rules::{DRAW, O_WINS, X_WINS, is_draw, is_full, outcome, terminal, utility, winner};
pub use search::{Decision, decide, game_value, max_value, min_value, minimax};
pub use state::{actions, initial_state, player, result};
pub use types::{Board, Outcome, Player, Square};
