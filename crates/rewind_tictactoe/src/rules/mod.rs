//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating boards according to
//! tic-tac-toe rules. Rules are separated from history so the session can
//! compose them without owning any rule logic itself.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, check_winner};

use crate::{Board, MoveError, Outcome, Player, Position};
use tracing::{debug, instrument};

/// Evaluates a board.
///
/// A complete line wins even on a full board; a full board with no line
/// is a draw; anything else is in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Won { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Checks whether a mark may be placed at `index`.
///
/// The index must name a cell, the cell must be empty, and the game on
/// this board must still be in progress.
#[instrument]
pub fn is_legal(board: &Board, index: usize) -> bool {
    check_move(board, index).is_ok()
}

/// Places `player`'s mark at `index`, returning the new board.
///
/// The input board is never modified. Illegal moves return the reason and
/// produce no board.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `index` is not 0-8
/// - [`MoveError::GameOver`] if the board is already won or drawn
/// - [`MoveError::CellOccupied`] if the cell already holds a mark
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let pos = check_move(board, index)?;
    debug!(position = %pos, "Placing mark");
    Ok(board.with_mark(pos, player))
}

fn check_move(board: &Board, index: usize) -> Result<Position, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if evaluate(board).is_decided() {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // X X X / O O O / _ _ _ can't happen in play, but X's row comes first.
        let board = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                player: Player::X,
                line: WIN_LINES[0],
            }
        );
    }

    #[test]
    fn test_rejection_order() {
        let won = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        assert_eq!(apply_move(&won, 9, Player::O), Err(MoveError::OutOfBounds(9)));
        assert_eq!(apply_move(&won, 0, Player::O), Err(MoveError::GameOver));
        assert_eq!(apply_move(&won, 5, Player::O), Err(MoveError::GameOver));

        let open = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(
            apply_move(&open, 4, Player::O),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }
}
