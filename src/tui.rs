//! Terminal session for the catalog
//!
//! Raw mode, the alternate screen and mouse capture are switched on by
//! [`Tui::enter`] and switched off again on exit or drop, so a failed fetch
//! still leaves a usable shell behind.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub tick_rate: Duration,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
            tick_rate: DEFAULT_TICK_RATE,
            active: false,
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Hand the terminal back to the shell. Does nothing when not entered.
    pub fn exit(&mut self) -> Result<()> {
        if std::mem::take(&mut self.active) {
            restore()?;
        }
        Ok(())
    }

    /// Wait up to one tick for input
    ///
    /// Only key presses are passed on; release and repeat reports would
    /// otherwise type every character twice on terminals that send them.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        Ok(match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Press => None,
            other => Some(other),
        })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::warn!(error = %e, "could not restore terminal");
        }
    }
}

fn restore() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}
