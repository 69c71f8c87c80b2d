//! Application state and key handling.

use crate::config::UiOptions;
use crate::input::{digit_to_index, move_cursor, move_selection};
use crossterm::event::KeyCode;
use rewind_tictactoe::{Position, Session};
use tracing::{debug, instrument};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor; Enter plays.
    Board,
    /// Arrow keys move the history selection; Enter jumps.
    History,
}

/// Main application state.
///
/// The app owns the session and never changes it except through
/// `play`, `jump_to` and `reset`.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    cursor: Position,
    selected: usize,
    focus: Focus,
    message: Option<String>,
    options: UiOptions,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new(options: UiOptions) -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            selected: 0,
            focus: Focus::Board,
            message: None,
            options,
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the last rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Gets the rendering options.
    pub fn options(&self) -> UiOptions {
        self.options
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(index) = digit_to_index(key) {
            self.play(index);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char('n') | KeyCode::Char('r') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::History => self.jump_to(self.selected),
            },
            _ => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => {
                    self.selected = move_selection(self.selected, self.session.history_len(), key)
                }
            },
        }
    }

    /// Plays at `index` on the board in view.
    pub fn play(&mut self, index: usize) {
        match self.session.play(index) {
            Ok(()) => {
                self.message = None;
                self.selected = self.session.current_move();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Jumps the view to history entry `index`.
    pub fn jump_to(&mut self, index: usize) {
        match self.session.jump_to(index) {
            Ok(()) => {
                self.message = None;
                self.selected = index;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Starts a new game.
    pub fn new_game(&mut self) {
        debug!("Starting new game");
        self.session.reset();
        self.selected = 0;
        self.message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}
