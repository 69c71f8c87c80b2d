//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use rewind_tui::{App, UiOptions, draw};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_initial_screen() {
    let screen = render(&App::default());
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(!screen.contains("Go to move #1"));
}

#[test]
fn test_history_lists_moves() {
    let mut app = App::default();
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('1'));

    let screen = render(&app);
    assert!(screen.contains("Go to move #1 (X -> Center)"));
    assert!(screen.contains("Go to move #2 (O -> Top-left)"));
    assert!(screen.contains("Next player: X"));
}

#[test]
fn test_rejection_shown_in_status() {
    let mut app = App::default();
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('5'));

    let screen = render(&app);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Center is already occupied"));
}

#[test]
fn test_winner_and_draw_status() {
    let mut app = App::default();
    for key in ['1', '4', '2', '5', '3'] {
        app.handle_key(KeyCode::Char(key));
    }
    assert!(render(&app).contains("Winner: X"));

    let mut app = App::new(UiOptions {
        highlight_winning_line: false,
        show_move_hints: false,
    });
    for key in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        app.handle_key(KeyCode::Char(key));
    }
    assert!(render(&app).contains("It's a Draw!"));
}
