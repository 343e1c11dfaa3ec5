//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use unbeatable_tictactoe::{Board, Position};

/// A participant that can choose the next move.
///
/// The core is synchronous, so this seam is too: `pick` blocks until the
/// player has decided. Implementations must return an empty square.
pub trait Player {
    /// Picks the next move for the given board.
    fn pick(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
