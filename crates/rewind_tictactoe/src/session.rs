//! Game session: history plus the move currently in view.

use super::rules::{apply_move, evaluate};
use super::{Board, History, HistoryError, Move, MoveError, Outcome, Player, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A tic-tac-toe game with time travel.
///
/// The only state is the board history and the index of the move in
/// view. Everything else (player to move, outcome, status) is derived
/// from those two fields on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub(crate) history: History,
    pub(crate) current_move: usize,
}

impl Session {
    /// Creates a new session at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            history: History::new(),
            current_move: 0,
        }
    }

    /// Replays board indices from a fresh session.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move. Moves before it are not kept.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut session = Self::new();
        for &index in indices {
            session.play(index)?;
        }
        Ok(session)
    }

    /// Plays the next mark at `index` on the board in view.
    ///
    /// If the view is behind the latest move, the later moves are
    /// discarded and the new move becomes the end of the history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the move is illegal on the board in view.
    /// A rejected move leaves the session unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move, history_len = self.history.len()))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        let player = self.next_player();

        let next = match apply_move(self.view_board(), index, player) {
            Ok(board) => board,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                return Err(e);
            }
        };

        self.current_move = self.history.branch(self.current_move, next);

        info!(
            player = %player,
            current_move = self.current_move,
            outcome = %self.outcome(),
            "Move played"
        );

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(())
    }

    /// Moves the view to `move_index` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if no such entry exists.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        let len = self.history.len();
        if move_index >= len {
            debug!(len, "Jump target out of range");
            return Err(HistoryError::OutOfRange {
                index: move_index,
                len,
            });
        }

        self.current_move = move_index;
        debug!("Jumped");
        Ok(())
    }

    /// Discards the history and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded_moves = self.history.len() - 1, "Resetting session");
        self.history = History::new();
        self.current_move = 0;
    }

    /// Returns the board in view.
    pub fn view_board(&self) -> &Board {
        &self.history.boards()[self.current_move]
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of history entries, including the starting board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the history entry in view.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Player who places the next mark on the board in view.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.current_move)
    }

    /// Evaluates the board in view.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.view_board())
    }

    /// Status line for the board in view.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Won { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(self.next_player()),
        }
    }

    /// Label for the control that jumps to history entry `index`.
    pub fn move_label(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }

    /// The move that produced history entry `index`.
    ///
    /// Returns `None` for the starting board and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.history.get(index.checked_sub(1)?)?;
        let after = self.history.get(index)?;
        Move::between(before, after)
    }

    /// Copies the history and view index together.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            history: self.history.boards().to_vec(),
            current_move: self.current_move,
            status: self.status(),
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{InvariantSet, SessionInvariants};
        use tracing::error;

        if let Err(violations) = SessionInvariants::check_all(self) {
            for violation in &violations {
                error!(invariant = %violation.description, "Session invariant violated");
            }
        }
    }
}

/// Owned, consistent copy of a session's history and view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Every board from the start to the latest move.
    pub history: Vec<Board>,
    /// Index of the board in view.
    pub current_move: usize,
    /// Status line for the board in view.
    pub status: Status,
}
