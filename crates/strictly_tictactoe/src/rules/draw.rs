//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::types::Player;

    fn from_rows(rows: [[Player; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (row, marks) in rows.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                board = board.place(Action::new(row, col), *mark);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().place(Action::new(1, 1), Player::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
