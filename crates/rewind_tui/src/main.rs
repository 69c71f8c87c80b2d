//! Rewind - terminal tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tui::{Cli, Command, TuiConfig, render_text, replay, run_tui};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file so RUST_LOG can live there
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TuiConfig::from_file(path)?,
        None => TuiConfig::default(),
    };

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Replay { moves, jump, json } => {
            init_stderr_logging(&config);
            run_replay(&moves, jump, json)
        }
    }
}

fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file while the game owns the terminal.
fn init_file_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

fn init_stderr_logging(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_replay(moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    let result = replay(moves, jump)?;

    for rejection in &result.rejected {
        eprintln!("Skipped move '{}': {}", rejection.token, rejection.reason);
    }

    if json {
        let snapshot = serde_json::to_string_pretty(&result.session.snapshot())
            .context("Failed to serialize session snapshot")?;
        println!("{}", snapshot);
    } else {
        print!("{}", render_text(&result.session));
    }

    info!(status = %result.session.status(), "Replay printed");
    Ok(())
}
