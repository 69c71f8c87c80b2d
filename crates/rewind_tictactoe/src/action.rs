//! First-class move and move-error types.
//!
//! Moves are domain events, not side effects. The history stores boards,
//! so a move is recovered by comparing two consecutive boards.

use super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless the boards differ in exactly one cell and that
    /// cell went from empty to a mark.
    #[instrument(skip_all)]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::iter().filter(|&pos| before.get(pos) != after.get(pos));

        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }

        match (before.get(position), after.get(position).player()) {
            (Cell::Empty, Some(player)) => Some(Self::new(player, position)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
///
/// A rejected move never changes any board or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The board in view is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
