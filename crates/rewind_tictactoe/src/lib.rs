//! Rewind tic-tac-toe - rules engine with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over an immutable [`Board`] ([`evaluate`],
//!   [`is_legal`], [`apply_move`]).
//! - **History**: a linear sequence of boards, index 0 always empty.
//! - **Session**: owns the history and the move currently in view. Turn
//!   parity and outcome are derived, never stored.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Outcome, Player, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.play(index).unwrap();
//! }
//! assert!(matches!(session.outcome(), Outcome::Won { player: Player::X, .. }));
//!
//! // Rewind and branch.
//! session.jump_to(2).unwrap();
//! session.play(8).unwrap();
//! assert_eq!(session.history_len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
mod invariants;
mod outcome;
mod position;
mod rules;
mod session;
mod types;

#[cfg(kani)]
mod kani_support;

pub use action::{Move, MoveError};
pub use history::{History, HistoryError};
pub use invariants::{
    AlternatingMarksInvariant, CursorInBoundsInvariant, Invariant, InvariantSet,
    InvariantViolation, NonEmptyHistoryInvariant, SessionInvariants, SingleStepInvariant,
};
pub use outcome::{Outcome, Status};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, apply_move, check_winner, evaluate, is_full, is_legal};
pub use session::{Session, SessionSnapshot};
pub use types::{Board, Cell, Player};
