//! Game rules for tic-tac-toe.
//!
//! Pure functions that decide whether a board is finished and what it is
//! worth. Rules are kept apart from board storage so the search can compose
//! them freely.

pub mod draw;
pub mod scoring;
pub mod win;

pub use draw::{is_draw, is_full};
pub use scoring::{DRAW, O_WINS, X_WINS, outcome, terminal, utility};
pub use win::winner;
