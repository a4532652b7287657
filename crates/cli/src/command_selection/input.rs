use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use selto_core::error::{Error, Result};

use super::types::{CycleDirection, KeyAction};

/// A blocking source of key presses.
pub trait KeySource {
    /// Blocks until the next key press.
    ///
    /// # Errors
    ///
    /// Returns an error if the input device can't be read.
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        (**self).next_key()
    }
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Key presses from the real terminal.
///
/// Raw mode is on for as long as this value lives.
pub struct TerminalKeys {
    _raw_mode_guard: RawModeGuard,
}

impl TerminalKeys {
    /// Puts the terminal into raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] if raw mode can't be enabled, e.g. when stdin
    /// is not a terminal.
    pub fn new() -> Result<Self> {
        enable_raw_mode().map_err(Error::Input)?;

        Ok(Self {
            _raw_mode_guard: RawModeGuard,
        })
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(key_event);
                }
            }
        }
    }
}

/// Maps a key press to what it does in an open menu.
pub fn key_action(key_event: &KeyEvent, cancel_on_backspace: bool) -> KeyAction {
    match key_event.code {
        KeyCode::Up => KeyAction::Move(CycleDirection::Up),
        KeyCode::Down => KeyAction::Move(CycleDirection::Down),
        KeyCode::Enter => KeyAction::Select,
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Cancel
        }
        KeyCode::Backspace if cancel_on_backspace => KeyAction::Cancel,
        _ => KeyAction::Ignore,
    }
}
