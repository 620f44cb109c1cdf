//! Terminal session lifecycle.
//!
//! Raw mode, the alternate screen, and mouse capture are entered once and
//! restored on drop and on panic, so a crash never leaves the shell in raw
//! mode.

use std::io::{self, Stdout};
use std::panic;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub struct Session {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

/// Enter the TUI session.
pub fn enter() -> io::Result<Session> {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave();
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    Ok(Session {
        terminal: Terminal::new(CrosstermBackend::new(stdout))?,
    })
}

fn leave() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = leave();
    }
}
