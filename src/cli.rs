//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use tictactoe::core::SessionConfig;
use tictactoe::types::{ROUND_OVER_DELAY_MS, TURN_BUDGET_MS};

/// Two-player Tic Tac Toe in the terminal. Click a square to play; click
/// Close or press q / Esc / Ctrl-C to quit.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version)]
pub struct Cli {
    /// Seconds each player has to move before the turn passes
    #[arg(long, default_value_t = TURN_BUDGET_MS / 1000, value_parser = clap::value_parser!(u32).range(1..=3600))]
    pub turn_seconds: u32,

    /// Celebration pause after a round ends, in milliseconds
    #[arg(long, default_value_t = ROUND_OVER_DELAY_MS)]
    pub round_over_ms: u32,

    /// Seed for the confetti (random if omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Write logs to this file; RUST_LOG filters (default: info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            turn_budget_ms: self.turn_seconds.saturating_mul(1000),
            round_over_delay_ms: self.round_over_ms,
        }
    }
}
