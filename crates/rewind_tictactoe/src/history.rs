//! Linear board history with branch-on-replay.

use super::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered sequence of boards, one per move.
///
/// Index 0 is always the empty board and the history is never empty.
/// It is a single line, never a tree: branching from an earlier index
/// discards every board after it.
///
/// Serializes as a plain list of boards. Deserializing rejects a list that
/// is empty or does not start from the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    pub(crate) boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of boards, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: construction and deserialization both require a
    /// starting board.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Gets the board at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Returns the boards in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the most recent board.
    pub fn last(&self) -> Option<&Board> {
        self.boards.last()
    }

    /// Keeps boards `0..=from` and appends `board` after them.
    ///
    /// Returns the index of the appended board.
    #[instrument(skip(self, board), fields(len = self.boards.len()))]
    pub(crate) fn branch(&mut self, from: usize, board: Board) -> usize {
        debug_assert!(from < self.boards.len(), "branch point beyond history");

        let discarded = self.boards.len().saturating_sub(from + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding forward history");
        }

        self.boards.truncate(from + 1);
        self.boards.push(board);
        self.boards.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = HistoryError;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        match boards.first() {
            None => Err(HistoryError::Empty),
            Some(start) if *start != Board::new() => Err(HistoryError::MarkedStart),
            Some(_) => Ok(Self { boards }),
        }
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards
    }
}

/// Error returned when a history index does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The index is past the end of the history.
    #[display("Move index {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A history was built from an empty list of boards.
    #[display("History has no starting board")]
    Empty,

    /// A history was built from boards whose first entry is not empty.
    #[display("History must start from the empty board")]
    MarkedStart,
}

impl std::error::Error for HistoryError {}
