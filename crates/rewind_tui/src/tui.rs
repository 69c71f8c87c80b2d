//! Interactive terminal loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into cooked mode when dropped.
///
/// Lives from raw mode being enabled until the loop ends, so early returns
/// and unwinding panics still restore the terminal.
#[derive(Debug)]
struct TerminalGuard {
    alternate_screen: bool,
    restored: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self {
            alternate_screen: false,
            restored: false,
        };
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    /// Undoes `enter`. Later calls are no-ops.
    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode().context("Failed to disable raw mode")?;
        if self.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen, Show)
                .context("Failed to leave alternate screen")?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Terminal restore failed");
        }
    }
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on every exit path, including panics.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting interactive game");

    let mut guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let mut app = App::new(config.ui_options());
    let result = run_loop(&mut terminal, &mut app);

    guard.restore()?;

    info!(
        history_len = app.session().history_len(),
        status = %app.session().status(),
        "Interactive game ended"
    );
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(key = ?key.code, "Key pressed");
            app.handle_key(key.code);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_runs_once() {
        // Raw mode was never enabled, so disabling it is a no-op.
        let mut guard = TerminalGuard {
            alternate_screen: false,
            restored: false,
        };
        assert!(guard.restore().is_ok());
        assert!(guard.restored);
        assert!(guard.restore().is_ok());
    }
}
