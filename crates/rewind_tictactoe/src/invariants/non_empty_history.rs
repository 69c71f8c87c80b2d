//! Non-empty history invariant: the history starts at the empty board.

use super::super::{Board, Session};
use super::Invariant;

/// Invariant: History has at least one entry and entry 0 is the empty board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<Session> for NonEmptyHistoryInvariant {
    fn holds(session: &Session) -> bool {
        session.history().boards().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds() {
        assert!(NonEmptyHistoryInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_holds_after_reset() {
        let mut session = Session::replay(&[0, 1, 2]).unwrap();
        session.reset();
        assert!(NonEmptyHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_emptied_history_violates() {
        let mut session = Session::new();
        session.history.boards.clear();
        assert!(!NonEmptyHistoryInvariant::holds(&session));
    }
}
