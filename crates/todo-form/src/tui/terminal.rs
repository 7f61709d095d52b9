/*
[INPUT]:  ratatui default terminal (raw mode, alternate screen, panic hook)
[OUTPUT]: TerminalGuard that owns the terminal for the lifetime of the form
[POS]:    TUI terminal lifecycle guard
[UPDATE]: When the form needs extra terminal modes
*/

use anyhow::{Context, Result};
use ratatui::{DefaultTerminal, Frame};

/// Restores the terminal when dropped, including on early `?` returns.
pub(super) struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub(super) fn new() -> Result<Self> {
        // try_init also installs a panic hook that restores the screen.
        let mut terminal = ratatui::try_init().context("initialize terminal")?;
        terminal.hide_cursor().context("hide cursor")?;
        Ok(Self { terminal })
    }

    pub(super) fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).context("draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        ratatui::restore();
    }
}
