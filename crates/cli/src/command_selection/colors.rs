use std::collections::HashMap;

use crossterm::style::{Attribute, Color, ContentStyle, StyledContent};
use selto_core::selection_tree::Item;

/// Color names accepted in the configuration, with their terminal colors.
///
/// The plain names are the normal ANSI colors, `*Bright` the bright ones.
/// Crossterm's own names (`darkred`, `grey`, ...) are accepted as well.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::DarkRed),
    ("green", Color::DarkGreen),
    ("yellow", Color::DarkYellow),
    ("blue", Color::DarkBlue),
    ("magenta", Color::DarkMagenta),
    ("cyan", Color::DarkCyan),
    ("white", Color::Grey),
    ("gray", Color::DarkGrey),
    ("blackbright", Color::DarkGrey),
    ("redbright", Color::Red),
    ("greenbright", Color::Green),
    ("yellowbright", Color::Yellow),
    ("bluebright", Color::Blue),
    ("magentabright", Color::Magenta),
    ("cyanbright", Color::Cyan),
    ("whitebright", Color::White),
    ("darkgrey", Color::DarkGrey),
    ("darkred", Color::DarkRed),
    ("darkgreen", Color::DarkGreen),
    ("darkyellow", Color::DarkYellow),
    ("darkblue", Color::DarkBlue),
    ("darkmagenta", Color::DarkMagenta),
    ("darkcyan", Color::DarkCyan),
    ("grey", Color::Grey),
];

/// Maps symbolic color names to terminal styling.
///
/// Built once at startup and handed to everything that renders. A disabled
/// palette styles nothing, so output is plain text.
#[derive(Debug, Clone)]
pub struct Palette {
    enabled: bool,
    named: HashMap<String, Color>,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        let named = NAMED_COLORS
            .iter()
            .map(|(name, color)| ((*name).to_string(), *color))
            .collect();

        Self { enabled, named }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Looks up a color by name, ignoring case and `_`/`-` separators.
    pub fn color(&self, name: &str) -> Option<Color> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        self.named.get(&key).copied()
    }

    pub fn paint(&self, text: &str, color: Option<Color>, bold: bool) -> StyledContent<String> {
        let mut style = ContentStyle::new();

        if self.enabled {
            style.foreground_color = color;
            if bold {
                style.attributes.set(Attribute::Bold);
            }
        }

        style.apply(text.to_string())
    }

    /// The item's label in its configured color. Unknown names are plain.
    pub fn item(&self, item: &Item, bold: bool) -> StyledContent<String> {
        let color = item.color.as_deref().and_then(|name| self.color(name));
        self.paint(&item.display, color, bold)
    }

    pub fn cyan(&self, text: &str) -> StyledContent<String> {
        self.paint(text, Some(Color::DarkCyan), false)
    }

    pub fn gray(&self, text: &str) -> StyledContent<String> {
        self.paint(text, Some(Color::DarkGrey), false)
    }

    pub fn green(&self, text: &str) -> StyledContent<String> {
        self.paint(text, Some(Color::DarkGreen), false)
    }

    pub fn red(&self, text: &str) -> StyledContent<String> {
        self.paint(text, Some(Color::DarkRed), false)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
