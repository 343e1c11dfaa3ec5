//! Human player that reads moves from standard input.

use super::Player;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;
use unbeatable_tictactoe::{Board, Position};

/// Interactive player: prompts on stdout, reads from stdin, and re-prompts
/// until the input names an empty square.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn pick(&mut self, board: &Board) -> Result<Position> {
        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            print!("Enter your move (0-8): ");
            io::stdout().flush().context("flushing prompt")?;

            line.clear();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("reading move from stdin")?;
            if read == 0 {
                anyhow::bail!("input closed before the game finished");
            }

            match Position::from_label_or_number(line.trim()) {
                Some(pos) if board.is_empty(pos) => {
                    debug!(player = %self.name, position = %pos, "human chose move");
                    return Ok(pos);
                }
                _ => println!("Invalid move. Try again."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
