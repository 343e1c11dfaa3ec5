//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is drawn: a full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn fill(moves: [(usize, Player); 9]) -> Board {
        let mut board = Board::new();
        for (idx, player) in moves {
            let pos = Position::from_index(idx).unwrap();
            board = board.place(pos, player).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().place(Position::Center, Player::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([
            (0, X),
            (1, O),
            (2, X),
            (3, O),
            (4, X),
            (5, X),
            (6, O),
            (7, X),
            (8, O),
        ]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X wins top row on a board that is not yet full
        let board = Board::new()
            .place(Position::TopLeft, X)
            .and_then(|b| b.place(Position::MiddleLeft, O))
            .and_then(|b| b.place(Position::TopCenter, X))
            .and_then(|b| b.place(Position::Center, O))
            .and_then(|b| b.place(Position::TopRight, X))
            .unwrap();
        assert!(!is_draw(&board));
        assert!(check_winner(&board).is_some());
    }
}
