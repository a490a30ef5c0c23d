//! Terminal driver.
//!
//! Implements [`Driver`] on top of crossterm input and a ratatui terminal.
//! Input blocks until the next terminal event; keystrokes that only edit the
//! input line are redrawn here directly since they produce no app event.

use std::io;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use roomy_app::{App, AppEvent, Driver};
use thiserror::Error;
use tracing::debug;

use crate::{
    input::{InputState, KeyInput},
    ui,
};

/// Errors from the terminal driver.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Terminal I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Driver for an interactive terminal.
pub struct TerminalDriver {
    terminal: DefaultTerminal,
    input: InputState,
    today: fn() -> NaiveDate,
}

impl TerminalDriver {
    /// Switch the terminal to raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialised.
    pub fn new() -> Result<Self, TerminalError> {
        let terminal = ratatui::try_init()?;
        Ok(Self { terminal, input: InputState::new(), today: || Local::now().date_naive() })
    }

    fn draw(&mut self, app: &App) -> Result<(), TerminalError> {
        let input = &mut self.input;
        self.terminal.draw(|frame| ui::draw(frame, app, input))?;
        Ok(())
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    fn poll_events(&mut self, app: &App) -> Result<Vec<AppEvent>, Self::Error> {
        let events = match event::read()? {
            Event::Key(key) => {
                let key = KeyInput::from(key);
                if key == KeyInput::Ignored {
                    return Ok(vec![]);
                }
                self.input.handle_key(key, app.notice().is_some(), (self.today)())
            },
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                vec![]
            },
            _ => return Ok(vec![]),
        };

        if events.is_empty() {
            self.draw(app)?;
        }
        Ok(events)
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.draw(app)
    }

    fn stop(&mut self) {
        if let Err(err) = ratatui::try_restore() {
            debug!(error = %err, "failed to restore terminal");
        }
    }
}
