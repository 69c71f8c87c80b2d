//! Terminal front end for rewind tic-tac-toe.
//!
//! The front end holds a [`rewind_tictactoe::Session`] and only talks to
//! it through `play`, `jump_to`, `reset` and the read-only views. After
//! every key press the whole screen is redrawn from the session.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod tui;
mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig, UiOptions};
pub use input::{digit_to_index, move_cursor, move_selection};
pub use replay::{Rejection, Replay, ReplayError, parse_token, render_text, replay};
pub use tui::run_tui;
pub use ui::draw;
