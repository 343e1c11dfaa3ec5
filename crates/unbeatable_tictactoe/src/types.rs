//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// A `Board` is a value type: applying a move with [`Board::place`] returns
/// a new board and leaves the receiver untouched. A mark, once placed, is
/// never reset within a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from the provided squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the game is over (winner or full board).
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Returns a new board with `player`'s mark placed at `pos`.
    ///
    /// The receiver is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square is not empty.
    pub fn place(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(self.with(pos, player))
    }

    /// Copies the board with `player`'s mark at `pos`, without legality
    /// checks. Callers must have filtered `pos` through empty squares.
    pub(crate) fn with(&self, pos: Position, player: Player) -> Board {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Board { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
