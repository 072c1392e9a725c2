//! Scoped raw-mode acquisition.

use std::io;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// RAII guard over raw mode and the alternate screen.
///
/// Dropping the guard restores cooked mode and the primary screen, so
/// every exit path out of the editor loop, including error propagation,
/// leaves the terminal usable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
