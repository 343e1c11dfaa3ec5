//! Tests for board positions.

use unbeatable_tictactoe::{Board, Player, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_all_positions_in_ascending_index_order() {
    let indices: Vec<usize> = Position::ALL.iter().map(|p| p.to_index()).collect();
    assert_eq!(indices, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = Board::new().place(Position::TopLeft, Player::X).unwrap();
    let board = board.place(Position::Center, Player::O).unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_parse_from_number_or_label() {
    assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number(" 0 "), Some(Position::TopLeft));
    assert_eq!(
        Position::from_label_or_number("Top-left"),
        Some(Position::TopLeft)
    );
    assert_eq!(
        Position::from_label_or_number("center"),
        Some(Position::Center)
    );
    assert_eq!(Position::from_label_or_number("9"), None);
    assert_eq!(Position::from_label_or_number(""), None);
    assert_eq!(Position::from_label_or_number("frobnicate"), None);
}
