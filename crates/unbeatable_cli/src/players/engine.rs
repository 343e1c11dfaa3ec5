//! Engine-backed computer player.

use super::Player;
use anyhow::Result;
use tracing::debug;
use unbeatable_tictactoe::{Board, Minimax, Position};

/// Computer player that plays perfectly via minimax search.
pub struct EnginePlayer {
    name: String,
    engine: Minimax,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>, engine: Minimax) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }
}

impl Player for EnginePlayer {
    fn pick(&mut self, board: &Board) -> Result<Position> {
        let pos = self.engine.best_move(board)?;
        debug!(player = %self.name, position = %pos, "engine chose move");
        println!("{} plays at position {}.", self.name, pos.to_index());
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
