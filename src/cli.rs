//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use sneck::core::GameConfig;
use sneck::types::DEFAULT_FPS;

/// Steer a growing snake around the board with h/j/k/l, quit with q.
#[derive(Parser, Debug)]
#[command(name = "sneck")]
#[command(about = "Terminal snake game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Frames (snake steps) per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Seed for fruit placement, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ignore a turn straight back onto the snake's neck instead of dying
    #[arg(long)]
    pub forbid_reversal: bool,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            fps: self.fps,
            seed: self.seed,
            allow_reversal: !self.forbid_reversal,
            ..GameConfig::default()
        }
    }
}
