use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

/// Errors returned by terminal initialization/restore helpers.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter the alternate screen with raw mode on and return a ratatui terminal.
pub fn init_terminal() -> Result<Tui, TerminalError> {
    enable_raw_mode()?;
    enter_alternate_screen().map_err(|e| {
        reset_raw_terminal();
        TerminalError::from(e)
    })
}

fn enter_alternate_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave the alternate screen, disable raw mode and show the cursor again.
pub fn restore_terminal(mut terminal: Tui) -> Result<(), TerminalError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort restore for the panic path, where no `Terminal` is at hand.
pub fn reset_raw_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
