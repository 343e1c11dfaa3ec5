//! Tests for board state operations.

use unbeatable_tictactoe::{Board, MoveError, Player, Position, Square};

const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);
const E: Square = Square::Empty;

#[test]
fn test_empty_board_has_all_nine_moves() {
    let board = Board::new();
    let indices: Vec<usize> = Position::valid_moves(&board)
        .iter()
        .map(|p| p.to_index())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_place_returns_new_board_without_mutating() {
    let before = Board::new().place(Position::TopLeft, Player::X).unwrap();
    let after = before.place(Position::Center, Player::O).unwrap();

    // predecessor unchanged
    assert!(before.is_empty(Position::Center));
    assert_eq!(before.get(Position::TopLeft), X);

    // successor differs at exactly the placed square
    let changed: Vec<Position> = Position::ALL
        .iter()
        .copied()
        .filter(|&pos| before.get(pos) != after.get(pos))
        .collect();
    assert_eq!(changed, vec![Position::Center]);
    assert_eq!(after.get(Position::Center), O);
}

#[test]
fn test_place_rejects_occupied_square() {
    let board = Board::new().place(Position::Center, Player::X).unwrap();
    assert_eq!(
        board.place(Position::Center, Player::O),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_completed_row_ends_the_game() {
    // X X X / - - - / - - -
    let board = Board::from_squares([X, X, X, E, E, E, E, E, E]);
    assert_eq!(board.winner(), Some(Player::X));
    assert!(board.is_over());
    assert!(!board.is_full());
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X O X / O X O / O X O
    let board = Board::from_squares([X, O, X, O, X, O, O, X, O]);
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
    assert!(board.is_over());
}

#[test]
fn test_queries_are_idempotent() {
    let board = Board::from_squares([X, O, X, E, O, E, E, E, E]);
    assert_eq!(board.winner(), board.winner());
    assert_eq!(board.is_full(), board.is_full());
    assert_eq!(Position::valid_moves(&board), Position::valid_moves(&board));
}
