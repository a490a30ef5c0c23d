//! Keyboard handling and the command input line.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use roomy_app::AppEvent;

use crate::commands;

/// Lines moved by `PageUp` and `PageDown`.
const PAGE: u16 = 10;

/// Keys the TUI reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character for the input line.
    Char(char),
    /// Delete the last character.
    Backspace,
    /// Run the input line, or dismiss an open notification.
    Enter,
    /// Switch view.
    Tab,
    /// Dismiss the notification, or clear the input line.
    Esc,
    /// Scroll the notification up one line.
    Up,
    /// Scroll the notification down one line.
    Down,
    /// Scroll the notification up one page.
    PageUp,
    /// Scroll the notification down one page.
    PageDown,
    /// Ctrl-C.
    Interrupt,
    /// Anything else.
    Ignored,
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Self::Ignored;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Interrupt,
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Enter,
            KeyCode::Tab => Self::Tab,
            KeyCode::Esc => Self::Esc,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            _ => Self::Ignored,
        }
    }
}

/// Contents of the command input line and the notification scroll offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    scroll: u16,
}

impl InputState {
    /// Empty input line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// First notification line shown in the popup.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Keep the scroll offset within what the popup can show.
    pub(crate) fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    /// Apply a key and return the app events it produced.
    ///
    /// While a notification is open, `Enter` and `Esc` dismiss it and leave
    /// the input line untouched, and the arrow and page keys scroll it. The
    /// offset restarts at the top for every notification.
    pub fn handle_key(&mut self, key: KeyInput, notice_open: bool, today: NaiveDate) -> Vec<AppEvent> {
        match key {
            KeyInput::Char(c) => {
                self.buffer.push(c);
                vec![]
            },
            KeyInput::Backspace => {
                self.buffer.pop();
                vec![]
            },
            KeyInput::Enter | KeyInput::Esc if notice_open => {
                self.scroll = 0;
                vec![AppEvent::Dismiss]
            },
            KeyInput::Enter => {
                self.scroll = 0;
                let line = std::mem::take(&mut self.buffer);
                commands::parse(&line).into_event(today).into_iter().collect()
            },
            KeyInput::Esc => {
                self.buffer.clear();
                vec![]
            },
            KeyInput::Up | KeyInput::PageUp if notice_open => {
                let lines = if key == KeyInput::Up { 1 } else { PAGE };
                self.scroll = self.scroll.saturating_sub(lines);
                vec![]
            },
            KeyInput::Down | KeyInput::PageDown if notice_open => {
                let lines = if key == KeyInput::Down { 1 } else { PAGE };
                self.scroll = self.scroll.saturating_add(lines);
                vec![]
            },
            KeyInput::Up | KeyInput::Down | KeyInput::PageUp | KeyInput::PageDown => vec![],
            KeyInput::Tab => vec![AppEvent::ToggleView],
            KeyInput::Interrupt => vec![AppEvent::Quit],
            KeyInput::Ignored => vec![],
        }
    }
}
