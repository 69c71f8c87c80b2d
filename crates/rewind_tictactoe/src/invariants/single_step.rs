//! Single-step invariant: each history entry adds exactly one mark.

use super::super::{Move, Session};
use super::Invariant;

/// Invariant: Consecutive boards differ in exactly one cell, empty to mark.
///
/// Marks are never erased or overwritten, and no move places two marks.
pub struct SingleStepInvariant;

impl Invariant<Session> for SingleStepInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .boards()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark"
    }
}
