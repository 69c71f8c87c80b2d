//! Non-interactive replay of a move list.

use rewind_tictactoe::{HistoryError, MoveError, Position, Session};
use std::fmt::Write;
use tracing::{info, instrument, warn};

/// A move that the session refused, with the token that named it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Token as given on the command line.
    pub token: String,
    /// Why the session refused it.
    pub reason: MoveError,
}

/// Session after replaying a move list.
#[derive(Debug, Clone)]
pub struct Replay {
    /// The resulting session.
    pub session: Session,
    /// Moves that were refused and skipped.
    pub rejected: Vec<Rejection>,
}

/// Error that stops a replay before it starts or ends.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A token is neither an index nor a position label.
    #[display("Unknown position '{}' (use 0-8 or a label like top-left)", _0)]
    UnknownPosition(String),

    /// The requested jump target does not exist.
    #[display("{}", _0)]
    Jump(HistoryError),
}

impl std::error::Error for ReplayError {}

/// Converts a token to a board index.
///
/// Any unsigned number is passed through so the engine can reject
/// out-of-range indices itself.
pub fn parse_token(token: &str) -> Result<usize, ReplayError> {
    let trimmed = token.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        return Ok(index);
    }

    Position::from_label_or_number(trimmed)
        .map(Position::to_index)
        .ok_or_else(|| ReplayError::UnknownPosition(trimmed.to_string()))
}

/// Plays `tokens` on a fresh session, then optionally jumps.
///
/// Rejected moves are recorded and skipped; the session is unchanged by
/// them, so later moves continue from the last accepted one.
#[instrument(skip(tokens), fields(moves = tokens.len()))]
pub fn replay(tokens: &[String], jump: Option<usize>) -> Result<Replay, ReplayError> {
    let indices = tokens
        .iter()
        .map(|token| parse_token(token))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = Session::new();
    let mut rejected = Vec::new();

    for (token, index) in tokens.iter().zip(indices) {
        if let Err(reason) = session.play(index) {
            warn!(token = %token, error = %reason, "Skipping rejected move");
            rejected.push(Rejection {
                token: token.clone(),
                reason,
            });
        }
    }

    if let Some(target) = jump {
        session.jump_to(target).map_err(ReplayError::Jump)?;
    }

    info!(
        history_len = session.history_len(),
        current_move = session.current_move(),
        rejected = rejected.len(),
        "Replay complete"
    );

    Ok(Replay { session, rejected })
}

/// Renders the board in view, the status line and the history list.
pub fn render_text(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", session.view_board().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", session.status());
    let _ = writeln!(out);
    let _ = writeln!(out, "History:");

    for index in 0..session.history_len() {
        let marker = if index == session.current_move() { '>' } else { ' ' };
        let _ = write!(out, "{} {}", marker, Session::move_label(index));
        if let Some(mov) = session.move_at(index) {
            let _ = write!(out, " ({})", mov);
        }
        let _ = writeln!(out);
    }

    out
}
