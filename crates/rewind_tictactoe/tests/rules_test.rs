//! Tests for the pure rule functions.

use rewind_tictactoe::{
    Board, Cell, MoveError, Outcome, Player, Position, WIN_LINES, apply_move, evaluate, is_legal,
};

fn board_from(marks: &str) -> Board {
    let mut cells = [Cell::Empty; 9];
    for (cell, ch) in cells.iter_mut().zip(marks.chars()) {
        *cell = match ch {
            'X' => Cell::X,
            'O' => Cell::O,
            _ => Cell::Empty,
        };
    }
    Board::from_cells(cells)
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_every_line_wins_for_both_players() {
    for line in WIN_LINES {
        for player in [Player::X, Player::O] {
            let mut cells = [Cell::Empty; 9];
            for index in line.indices() {
                cells[index] = player.cell();
            }
            let board = Board::from_cells(cells);

            assert_eq!(evaluate(&board), Outcome::Won { player, line }, "line {}", line);
        }
    }
}

#[test]
fn test_line_fixtures_per_row_column_diagonal() {
    let cases = [
        ("XXX......", Player::X, [0, 1, 2]),
        ("...OOO...", Player::O, [3, 4, 5]),
        ("......XXX", Player::X, [6, 7, 8]),
        ("O..O..O..", Player::O, [0, 3, 6]),
        (".X..X..X.", Player::X, [1, 4, 7]),
        ("..O..O..O", Player::O, [2, 5, 8]),
        ("X...X...X", Player::X, [0, 4, 8]),
        ("..O.O.O..", Player::O, [2, 4, 6]),
    ];

    for (marks, player, indices) in cases {
        let outcome = evaluate(&board_from(marks));
        assert_eq!(outcome.winner(), Some(player), "{}", marks);
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some(indices), "{}", marks);
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(evaluate(&board_from("XOXOXOOXO")), Outcome::Draw);
}

#[test]
fn test_simultaneous_lines_pick_first_in_scan_order() {
    let outcome = evaluate(&board_from("XXXOOO..."));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.winning_line(), Some(WIN_LINES[0]));
}

#[test]
fn test_illegal_on_occupied_cell() {
    let board = board_from("X...O....");
    assert!(!is_legal(&board, 0));
    assert!(!is_legal(&board, 4));
    assert!(is_legal(&board, 1));
}

#[test]
fn test_illegal_once_decided() {
    let won = board_from("XXXOO....");
    let drawn = board_from("XOXOXOOXO");
    for index in 0..9 {
        assert!(!is_legal(&won, index), "won board accepted {}", index);
        assert!(!is_legal(&drawn, index), "drawn board accepted {}", index);
    }
}

#[test]
fn test_illegal_out_of_range() {
    let board = Board::new();
    assert!(!is_legal(&board, 9));
    assert!(!is_legal(&board, usize::MAX));
    assert_eq!(
        apply_move(&board, 42, Player::X),
        Err(MoveError::OutOfBounds(42))
    );
}

#[test]
fn test_apply_move_does_not_mutate_input() {
    let board = board_from("X...O....");
    let before = board;

    let next = apply_move(&board, 8, Player::X).unwrap();

    assert_eq!(board, before);
    assert_eq!(next.get(Position::BottomRight), Cell::X);
    assert_eq!(next.mark_count(), before.mark_count() + 1);
    for index in 0..8 {
        assert_eq!(next.cell(index), before.cell(index));
    }
}

#[test]
fn test_outcome_serializes() {
    let outcome = evaluate(&board_from("XXX......"));
    let json = serde_json::to_string(&outcome).unwrap();
    let back: Outcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}
