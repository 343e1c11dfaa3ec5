//! Console tic-tac-toe against a perfect-play engine.
//!
//! The core crate is pure; this binary owns all I/O: it renders the board,
//! reads and validates the human's moves, asks the engine for the
//! computer's moves, and drives turn alternation until the game ends.

#![warn(missing_docs)]

mod players;
mod ui;

use anyhow::Result;
use clap::Parser;
use players::{EnginePlayer, HumanPlayer, Player};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{Game, GameTransition, Minimax, Player as Mark, TieBreak};

/// Play tic-tac-toe against a perfect-play engine.
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Console tic-tac-toe against a perfect-play engine", long_about = None)]
#[command(version)]
struct Args {
    /// Give the computer the X mark and the first move.
    #[arg(long)]
    computer_first: bool,

    /// Break ties between equally good engine moves with a coin flip
    /// instead of always taking the lowest index.
    #[arg(long)]
    random_ties: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let computer_mark = if args.computer_first { Mark::X } else { Mark::O };
    let tie_break = if args.random_ties {
        TieBreak::CoinFlip
    } else {
        TieBreak::LowestIndex
    };
    let engine = Minimax::with_tie_break(computer_mark, tie_break);

    let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = if args.computer_first {
        (
            Box::new(EnginePlayer::new("Computer", engine)),
            Box::new(HumanPlayer::new("You")),
        )
    } else {
        (
            Box::new(HumanPlayer::new("You")),
            Box::new(EnginePlayer::new("Computer", engine)),
        )
    };

    run(player_x, player_o, computer_mark)
}

/// Drives the game loop until a terminal state is reached.
fn run(
    mut player_x: Box<dyn Player>,
    mut player_o: Box<dyn Player>,
    computer_mark: Mark,
) -> Result<()> {
    let mut game = Game::new();

    loop {
        print!("{}", ui::render(game.board()));

        let mover: &mut dyn Player = match game.to_move() {
            Mark::X => player_x.as_mut(),
            Mark::O => player_o.as_mut(),
        };
        let pos = mover.pick(game.board())?;

        match game.place(pos) {
            Ok(GameTransition::InProgress(next)) => game = next,
            Ok(GameTransition::Won(end)) => {
                print!("{}", ui::render(end.board()));
                if end.winner() == computer_mark {
                    let winner = match end.winner() {
                        Mark::X => player_x.name(),
                        Mark::O => player_o.name(),
                    };
                    println!("{winner} wins!");
                } else {
                    println!("You win!");
                }
                return Ok(());
            }
            Ok(GameTransition::Draw(end)) => {
                print!("{}", ui::render(end.board()));
                println!("It's a draw!");
                return Ok(());
            }
            // players validate before returning, so this is a logic error
            Err(err) => anyhow::bail!("player proposed an illegal move: {err}"),
        }
    }
}
