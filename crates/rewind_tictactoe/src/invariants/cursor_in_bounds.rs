//! Cursor invariant: the move in view exists in the history.

use super::super::Session;
use super::Invariant;

/// Invariant: `current_move < history_len`.
pub struct CursorInBoundsInvariant;

impl Invariant<Session> for CursorInBoundsInvariant {
    fn holds(session: &Session) -> bool {
        session.current_move() < session.history_len()
    }

    fn description() -> &'static str {
        "Move in view is inside the history"
    }
}
