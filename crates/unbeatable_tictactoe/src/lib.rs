//! Pure tic-tac-toe game logic with an exhaustive minimax engine.
//!
//! # Architecture
//!
//! - **Board**: immutable-per-move snapshot of the 3x3 grid. Applying a
//!   move produces a new `Board`; the predecessor is never touched, so the
//!   search can explore sibling branches from the same parent freely.
//! - **Rules**: pure functions for win and draw detection.
//! - **Game**: typestate state machine over the board. Finished games have
//!   no `place` method, so playing into a terminal state is a compile error.
//! - **Minimax**: exhaustive adversarial search that computes the exact
//!   game-theoretic value of any board and the optimal computer move.
//!
//! There is no I/O in this crate; front ends hold the current state, ask a
//! player (human or engine) for a move, and apply it.
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Game, GameTransition, Minimax, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let game = Game::new(); // X moves first
//! let engine = Minimax::new(Player::X);
//! let opening = engine.best_move(game.board())?;
//! match game.place(opening)? {
//!     GameTransition::InProgress(next) => assert_eq!(next.to_move(), Player::O),
//!     _ => unreachable!("a single move cannot end the game"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::{Draw, Game, GameTransition, InProgress, Won};
pub use position::Position;
pub use rules::{WIN_LINES, check_winner, is_draw, is_full};
pub use search::{Minimax, SearchError, TieBreak};
pub use types::{Board, Player, Square};
