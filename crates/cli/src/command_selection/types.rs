//! Type definitions for menu selection.

/// Direction to move the cursor through the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

impl CycleDirection {
    /// Moves `position` one step, wrapping around a menu of `len` items.
    #[must_use]
    pub fn cycle(self, position: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        match self {
            Self::Up => (position + len - 1) % len,
            Self::Down => (position + 1) % len,
        }
    }
}

/// What a single key press means to an open menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Move(CycleDirection),
    Select,
    Cancel,
    Ignore,
}

/// Settings shared by every menu in a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Glyph drawn in front of the focused item.
    pub cursor_char: String,
    /// Whether Backspace backs out like Escape does.
    pub cancel_on_backspace: bool,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            cursor_char: ">".to_string(),
            cancel_on_backspace: false,
        }
    }
}
