//! Tests for the non-interactive replay command.

use rewind_tictactoe::{HistoryError, MoveError, Player, Position, Status};
use rewind_tui::{ReplayError, render_text, replay};

fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_replay_winning_game() {
    let result = replay(&tokens(&["0", "3", "1", "4", "2"]), None).unwrap();
    assert!(result.rejected.is_empty());
    assert_eq!(result.session.status(), Status::Winner(Player::X));
}

#[test]
fn test_replay_skips_rejected_moves() {
    let result = replay(&tokens(&["4", "center", "9", "0"]), None).unwrap();

    assert_eq!(result.rejected.len(), 2);
    assert_eq!(result.rejected[0].token, "center");
    assert_eq!(result.rejected[0].reason, MoveError::CellOccupied(Position::Center));
    assert_eq!(result.rejected[1].reason, MoveError::OutOfBounds(9));
    assert_eq!(result.session.history_len(), 3);
    assert_eq!(result.session.move_at(2).map(|m| m.player), Some(Player::O));
}

#[test]
fn test_replay_after_win_rejects_further_moves() {
    let result = replay(&tokens(&["0", "3", "1", "4", "2", "5"]), None).unwrap();
    assert_eq!(result.rejected.len(), 1);
    assert_eq!(result.rejected[0].reason, MoveError::GameOver);
    assert_eq!(result.session.history_len(), 6);
}

#[test]
fn test_replay_with_jump() {
    let result = replay(&tokens(&["0", "3", "1", "4", "2"]), Some(2)).unwrap();
    assert_eq!(result.session.current_move(), 2);
    assert_eq!(result.session.status(), Status::NextPlayer(Player::X));
}

#[test]
fn test_replay_errors() {
    assert_eq!(
        replay(&tokens(&["0", "sideways"]), None).unwrap_err(),
        ReplayError::UnknownPosition("sideways".to_string())
    );
    assert_eq!(
        replay(&tokens(&["0"]), Some(5)).unwrap_err(),
        ReplayError::Jump(HistoryError::OutOfRange { index: 5, len: 2 })
    );
}

#[test]
fn test_render_text() {
    let result = replay(&tokens(&["0", "4"]), Some(1)).unwrap();
    let text = render_text(&result.session);

    assert_eq!(
        text,
        "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\nNext player: O\n\nHistory:\n  Go to game start\n> Go to move #1 (X -> Top-left)\n  Go to move #2 (O -> Center)\n"
    );
}
