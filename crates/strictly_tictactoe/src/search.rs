//! Exhaustive minimax search.
//!
//! X maximizes utility, O minimizes it. The tree is at most nine plies deep,
//! so every line is searched to the end. The only pruning is the early exit
//! once a side has found the best value it could ever get, which cannot
//! change the result.

use crate::action::Action;
use crate::rules::{O_WINS, X_WINS, terminal, utility};
use crate::state::{player, successors};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Below every utility; the maximizer's starting accumulator.
const BELOW_LOSS: i8 = O_WINS - 1;
/// Above every utility; the minimizer's starting accumulator.
const ABOVE_WIN: i8 = X_WINS + 1;

/// Value of `board` with X to act and both sides playing optimally.
pub fn max_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    let mut value = BELOW_LOSS;
    for (action, child) in successors(board) {
        value = value.max(min_value(&child));
        if value == X_WINS {
            trace!(%action, "X found a forced win, skipping remaining moves");
            break;
        }
    }
    value
}

/// Value of `board` with O to act and both sides playing optimally.
pub fn min_value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    let mut value = ABOVE_WIN;
    for (action, child) in successors(board) {
        value = value.min(max_value(&child));
        if value == O_WINS {
            trace!(%action, "O found a forced win, skipping remaining moves");
            break;
        }
    }
    value
}

/// Game-theoretic value of a position: `1` if X can force a win, `-1` if O
/// can, `0` otherwise.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn game_value(board: &Board) -> i8 {
    match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// An optimal move together with the value it secures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    /// The player making the move.
    pub player: Player,
    /// The chosen action.
    pub action: Action,
    /// Value of the position after optimal continuation.
    pub value: i8,
}

/// Searches for the optimal move, returning it with its value.
///
/// Returns `None` on a terminal board. Among equally good moves the first
/// one in [`actions`](crate::actions) order wins.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn decide(board: &Board) -> Option<Decision> {
    if terminal(board) {
        debug!("Terminal board, no move to make");
        return None;
    }

    let to_move = player(board);
    let mut best: Option<(Action, i8)> = None;
    for (action, child) in successors(board) {
        let value = match to_move {
            Player::X => min_value(&child),
            Player::O => max_value(&child),
        };
        trace!(%action, value, "Evaluated move");

        // Strict comparison keeps the first of equally good moves.
        let improves = best.is_none_or(|(_, best_value)| match to_move {
            Player::X => value > best_value,
            Player::O => value < best_value,
        });
        if improves {
            best = Some((action, value));
        }
    }

    let (action, value) = best?;
    debug!(player = %to_move, row = action.row(), col = action.col(), value, "Chose move");
    Some(Decision {
        player: to_move,
        action,
        value,
    })
}

/// Returns the optimal action for the player to act, or `None` when the
/// board is terminal.
pub fn minimax(board: &Board) -> Option<Action> {
    decide(board).map(|decision| decision.action)
}
