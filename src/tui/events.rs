//! Input events consumed by the browser.
//!
//! Terminal events are converted into [`Event`]s at the edge so the browser
//! state machine never sees crossterm types and can be driven by a replayed
//! sequence in tests.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// A key as delivered by the terminal.
///
/// What a key *means* depends on the input mode; see [`super::app::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    /// A character typed with the control modifier, e.g. `Ctrl('c')`
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
}

/// Application event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key(Key),
    /// Terminal resized to the given size
    Resize { width: u16, height: u16 },
}

impl Key {
    /// Convert a crossterm key event; releases and unsupported keys yield `None`.
    pub fn from_crossterm(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char(c) => Some(Self::Ctrl(c.to_ascii_lowercase())),
                _ => None,
            };
        }

        let key = match key.code {
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Esc,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Tab => Self::Tab,
            _ => return None,
        };
        Some(key)
    }
}

impl Event {
    /// Convert a crossterm event; anything the browser does not handle yields `None`.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) => Key::from_crossterm(key).map(Self::Key),
            CrosstermEvent::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

/// Event handler
///
/// Blocks until the terminal delivers an event the browser understands; there
/// are no ticks since nothing in the browser is time-driven.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub const fn new() -> Self {
        Self
    }

    /// Wait for the next event
    pub fn next(&self) -> io::Result<Event> {
        loop {
            if let Some(event) = Event::from_crossterm(event::read()?) {
                return Ok(event);
            }
        }
    }
}
