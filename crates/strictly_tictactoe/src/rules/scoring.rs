//! Terminal detection and scoring.

use super::draw::is_draw;
use super::win::winner;
use crate::state::actions;
use crate::types::{Board, Outcome, Player};

/// Utility of a board X has won.
pub const X_WINS: i8 = 1;
/// Utility of a board O has won.
pub const O_WINS: i8 = -1;
/// Utility of a drawn board.
pub const DRAW: i8 = 0;

/// Returns true when the game is over: someone has won or no move remains.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || actions(board).is_empty()
}

/// Scores a terminal board: `1` if X won, `-1` if O won, `0` for a draw.
///
/// Only meaningful on terminal boards; debug builds assert it.
pub fn utility(board: &Board) -> i8 {
    debug_assert!(terminal(board), "utility of a board still in progress");
    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}

/// Classifies a board.
pub fn outcome(board: &Board) -> Outcome {
    if is_draw(board) {
        return Outcome::Draw;
    }
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::rules::draw::is_full;
    use crate::state::{initial_state, result};

    fn play(moves: &[(usize, usize)]) -> Board {
        moves.iter().fold(initial_state(), |board, &(row, col)| {
            result(&board, Action::new(row, col)).unwrap()
        })
    }

    #[test]
    fn test_empty_board_not_terminal() {
        let board = initial_state();
        assert!(!terminal(&board));
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_x_row_win() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(terminal(&board));
        assert_eq!(utility(&board), X_WINS);
        assert_eq!(outcome(&board), Outcome::XWins);
    }

    #[test]
    fn test_o_column_win() {
        let board = play(&[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
        assert!(terminal(&board));
        assert_eq!(utility(&board), O_WINS);
        assert_eq!(outcome(&board), Outcome::OWins);
    }

    #[test]
    fn test_full_board_draw() {
        // X O X / X O O / O X X
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert!(terminal(&board));
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), DRAW);
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_a_draw() {
        // X X X / O O X / X O O, completed by the ninth mark
        let board = play(&[
            (0, 0),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 1),
            (0, 2),
            (2, 2),
            (0, 1),
        ]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
        assert_eq!(utility(&board), X_WINS);
        assert_eq!(outcome(&board), Outcome::XWins);
    }
}
