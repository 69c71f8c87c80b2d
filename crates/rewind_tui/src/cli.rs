//! Command-line interface for the rewind front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a move list and print the result
    Replay {
        /// Moves as board indices 0-8 or labels, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// History entry to view after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the session snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
