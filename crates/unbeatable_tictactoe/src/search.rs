//! Exhaustive adversarial search for optimal play.
//!
//! The game tree is small (at most 9! nodes, cut down quickly by early
//! wins and draws), so plain minimax with no pruning or memoization is
//! exact and fast enough.

use crate::position::Position;
use crate::types::{Board, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tie-break policy when several moves share the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Keep the first (lowest-index) move with the best score.
    /// Deterministic and reproducible.
    #[default]
    LowestIndex,
    /// On an equal score, flip a coin before switching to the later move.
    ///
    /// All tied moves are equally optimal, so play stays perfect, but the
    /// chosen move is no longer reproducible.
    CoinFlip,
}

/// Error returned when the engine is asked to move on a terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// No empty squares remain.
    #[display("no available move")]
    NoAvailableMoves,
}

impl std::error::Error for SearchError {}

/// Perfect-play move selection via exhaustive minimax.
///
/// Holds only configuration: which mark the computer plays and how ties
/// between equally good moves are broken. No state survives between calls;
/// every method is a pure function of the board passed in (with
/// [`TieBreak::CoinFlip`] as the one deliberate exception).
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    computer: Player,
    tie_break: TieBreak,
}

impl Minimax {
    /// Creates an engine playing `computer`'s mark with the deterministic
    /// lowest-index tie-break.
    pub fn new(computer: Player) -> Self {
        Self {
            computer,
            tie_break: TieBreak::LowestIndex,
        }
    }

    /// Creates an engine with an explicit tie-break policy.
    pub fn with_tie_break(computer: Player, tie_break: TieBreak) -> Self {
        Self { computer, tie_break }
    }

    /// Returns the mark the engine plays.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Computes the exact game-theoretic value of `board`, assuming both
    /// players play optimally from here on.
    ///
    /// `maximizing` is true when the computer is about to move. The result
    /// is always one of -1 (human wins), 0 (draw), or +1 (computer wins).
    pub fn evaluate(&self, board: &Board, maximizing: bool) -> i32 {
        if let Some(winner) = board.winner() {
            return if winner == self.computer { 1 } else { -1 };
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in Position::valid_moves(board) {
            let score = self.evaluate(&board.with(pos, mover), !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Finds the optimal move for the computer on `board`.
    ///
    /// Assumes it is the computer's turn: each legal move is scored by
    /// evaluating its successor with the human to move, and the move with
    /// the strictly greatest score wins. Ties go to the lowest index unless
    /// the engine was configured with [`TieBreak::CoinFlip`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoAvailableMoves`] if the board has no empty
    /// squares. Callers should check [`Board::is_over`] before asking the
    /// engine to move.
    #[instrument(skip(self, board))]
    pub fn best_move(&self, board: &Board) -> Result<Position, SearchError> {
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for pos in Position::valid_moves(board) {
            let score = self.evaluate(&board.with(pos, self.computer), false);
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            } else if score == best_score
                && self.tie_break == TieBreak::CoinFlip
                && rand::rng().random_bool(0.5)
            {
                best_move = Some(pos);
            }
        }

        let pos = best_move.ok_or(SearchError::NoAvailableMoves)?;
        debug!(position = %pos, score = best_score, "engine chose move");
        Ok(pos)
    }
}
