use std::io::Write;

use log::debug;
use selto_core::error::Result;
use selto_core::navigation::Chooser;
use selto_core::selection_tree::Item;

use super::colors::Palette;
use super::input::KeySource;
use super::types::SelectorOptions;
use super::ui::Selector;

/// Answers the tree walk with one terminal menu per level.
///
/// All menus share the same writer and key source, so raw mode stays on for
/// the whole walk.
pub struct TerminalChooser<'a, W: Write, K: KeySource> {
    writer: W,
    keys: K,
    palette: &'a Palette,
    options: &'a SelectorOptions,
}

impl<'a, W: Write, K: KeySource> TerminalChooser<'a, W, K> {
    pub fn new(writer: W, keys: K, palette: &'a Palette, options: &'a SelectorOptions) -> Self {
        Self {
            writer,
            keys,
            palette,
            options,
        }
    }
}

impl<W: Write, K: KeySource> Chooser for TerminalChooser<'_, W, K> {
    fn choose(&mut self, title: &str, items: &[&Item]) -> Result<usize> {
        debug!("Opening menu `{title}` with {} items", items.len());

        Selector::new(&mut self.writer, self.palette, self.options, title, items)
            .open(&mut self.keys)
    }
}
