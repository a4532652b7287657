//! Interactive menu selection.
//!
//! This module draws one arrow-key menu per tree level directly below the
//! current terminal line, without switching to an alternate screen.
//!
//! # User Interface
//!
//! - Up/Down arrows move the cursor, wrapping at either end
//! - Enter chooses the focused item
//! - Escape or Ctrl-C cancels (Backspace too, when enabled)

// Export public items from submodules
pub mod chooser;
pub mod colors;
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use chooser::TerminalChooser;
pub use colors::Palette;
pub use input::{key_action, KeySource, TerminalKeys};
pub use types::{CycleDirection, KeyAction, SelectorOptions};
pub use ui::Selector;
