//! Derived game outcome and status line.
//!
//! Neither type is ever stored on a session. Both are recomputed from the
//! board in view so they cannot drift out of sync with it.

use super::{Player, WinLine};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The first complete line in scan order.
        line: WinLine,
    },
    /// Every cell is filled and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { player, line } => write!(f, "Player {} wins ({})", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Status line for the board in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The game is won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full with no winner.
    #[display("It's a Draw!")]
    Draw,
    /// The game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WIN_LINES;

    #[test]
    fn test_outcome_accessors() {
        let won = Outcome::Won {
            player: Player::O,
            line: WIN_LINES[6],
        };
        assert!(won.is_decided());
        assert_eq!(won.winner(), Some(Player::O));
        assert_eq!(won.winning_line(), Some(WIN_LINES[6]));

        assert!(Outcome::Draw.is_decided());
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Draw.winner(), None);

        assert!(!Outcome::InProgress.is_decided());
        assert_eq!(Outcome::InProgress.winning_line(), None);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "It's a Draw!");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }
}
