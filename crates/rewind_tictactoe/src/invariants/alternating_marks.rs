//! Alternating marks invariant: X, O, X, O, ... along the history.

use super::super::{Move, Player, Session};
use super::Invariant;

/// Invariant: The mark added at history entry `i` belongs to X when `i` is
/// odd and to O when `i` is even.
///
/// This is the stored-history side of deriving the player to move from
/// the view index.
pub struct AlternatingMarksInvariant;

impl Invariant<Session> for AlternatingMarksInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .boards()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                Move::between(&pair[0], &pair[1])
                    .is_some_and(|mov| mov.player == Player::for_turn(step))
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... starting with X"
    }
}
