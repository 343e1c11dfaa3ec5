//! Typestate game state machine for tic-tac-toe.
//!
//! The game phase is encoded in the type parameter, making invalid
//! operations impossible: a finished game has no `place` method, so no
//! further moves are accepted once a terminal state is reached.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::types::{Board, Player};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: Game is in progress.
#[derive(Debug, Clone, Copy)]
pub struct InProgress;

/// Typestate marker: Game ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: Game ended in a draw.
#[derive(Debug, Clone, Copy)]
pub struct Draw;

/// Game state with typestate phase encoding.
///
/// The type parameter `S` encodes the game phase:
/// - `Game<InProgress>` - game is ongoing, moves can be made
/// - `Game<Won>` - game ended with a winner
/// - `Game<Draw>` - game ended in a draw
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    winner: Option<Player>,
    history: Vec<Move>,
    _state: PhantomData<S>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with the next player to move.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

impl Game<InProgress> {
    /// Creates a new game in progress. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            winner: None,
            history: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Places the current player's mark at `pos`, consuming the game and
    /// returning the next state:
    ///
    /// - `InProgress` if the game continues (the turn passes)
    /// - `Won` if this move completes a winning line
    /// - `Draw` if the board is full with no winner
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the position is already
    /// occupied. Callers should validate with [`Board::is_empty`] first.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move))]
    pub fn place(self, pos: Position) -> Result<GameTransition, MoveError> {
        let board = self.board.place(pos, self.to_move)?;

        let mut history = self.history;
        history.push(Move::new(self.to_move, pos));

        if let Some(winner) = board.winner() {
            return Ok(GameTransition::Won(Game {
                board,
                to_move: self.to_move,
                winner: Some(winner),
                history,
                _state: PhantomData::<Won>,
            }));
        }

        if board.is_full() {
            return Ok(GameTransition::Draw(Game {
                board,
                to_move: self.to_move,
                winner: None,
                history,
                _state: PhantomData::<Draw>,
            }));
        }

        Ok(GameTransition::InProgress(Game {
            board,
            to_move: self.to_move.opponent(),
            winner: None,
            history,
            _state: PhantomData::<InProgress>,
        }))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the game.
    ///
    /// This method only exists on `Game<Won>`, providing compile-time
    /// guarantee that a winner exists.
    pub fn winner(&self) -> Player {
        self.winner.expect("won game always has a winner")
    }
}
