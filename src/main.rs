//! Terminal snake runner (default binary).
//!
//! Takes over the terminal, runs the frame loop until the snake dies or the
//! player quits, shows the final board, then restores the terminal and
//! prints the score.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sneck::core::{GameLoop, GameStatus, LoopOutcome, RenderBackend};
use sneck::term::TerminalBackend;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let backend = TerminalBackend::start().context("cannot take over the terminal")?;
    let mut game = GameLoop::new(cli.game_config(), backend)?;

    let result = play(&mut game);

    // Always try to restore terminal state.
    let _ = game.backend_mut().stop();
    let outcome = result?;

    info!(?outcome, "session finished");
    match outcome.status {
        GameStatus::BoardFull => println!("Board cleared! Score: {:03}", outcome.score),
        _ => println!("Score: {:03}", outcome.score),
    }
    Ok(())
}

fn play(game: &mut GameLoop<TerminalBackend>) -> Result<LoopOutcome> {
    let outcome = game.run()?;

    if matches!(outcome.status, GameStatus::GameOver | GameStatus::BoardFull) {
        game.show_game_over()?;
        game.backend_mut().wait_for_key()?;
    }

    Ok(outcome)
}
