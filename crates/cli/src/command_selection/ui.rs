use std::io::Write;

use crossterm::cursor::{Hide, MoveToPreviousLine, MoveUp, Show};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use selto_core::error::{Error, Result};
use selto_core::selection_tree::Item;

use super::colors::Palette;
use super::input::{key_action, KeySource};
use super::types::{KeyAction, SelectorOptions};

/// Hint shown after the title while a menu is open.
const TITLE_HINT: &str = "› - Use arrow-keys. Return to submit.";

/// Rows to move up for `rows` lines, clamped to what a cursor move can express.
fn rows_up(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// A single-choice menu drawn in place below the current terminal line.
///
/// The menu never clears the screen. It redraws its own lines by moving the
/// cursor back to the first item, and removes them once an answer is given,
/// leaving a one-line summary behind.
pub struct Selector<'a, W: Write> {
    writer: W,
    palette: &'a Palette,
    options: &'a SelectorOptions,
    title: &'a str,
    items: &'a [&'a Item],
    cursor_pos: usize,
}

impl<'a, W: Write> Selector<'a, W> {
    pub fn new(
        writer: W,
        palette: &'a Palette,
        options: &'a SelectorOptions,
        title: &'a str,
        items: &'a [&'a Item],
    ) -> Self {
        Self {
            writer,
            palette,
            options,
            title,
            items,
            cursor_pos: 0,
        }
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Shows the menu and blocks until an item is chosen.
    ///
    /// The terminal cursor is hidden while the menu is open and shown again
    /// on every way out, including input errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canceled`] on Escape or Ctrl-C, [`Error::Input`] if a
    /// key can't be read, [`Error::EmptyMenu`] if there is nothing to choose.
    pub fn open<K: KeySource + ?Sized>(&mut self, keys: &mut K) -> Result<usize> {
        if self.items.is_empty() {
            return Err(Error::EmptyMenu);
        }

        let outcome = self.run(keys);
        let summary = self.write_summary(&outcome);
        let shown = execute!(self.writer, Show);

        let index = outcome?;
        summary?;
        shown?;
        Ok(index)
    }

    fn run<K: KeySource + ?Sized>(&mut self, keys: &mut K) -> Result<usize> {
        queue!(self.writer, Hide)?;

        if self.has_title() {
            queue!(
                self.writer,
                Print(format!(
                    "\r{} {} {}\r\n",
                    self.palette.cyan("?"),
                    self.title,
                    self.palette.gray(TITLE_HINT)
                ))
            )?;
        }

        self.render(false)?;

        loop {
            let key_event = keys.next_key().map_err(Error::Input)?;

            match key_action(&key_event, self.options.cancel_on_backspace) {
                KeyAction::Move(direction) => {
                    self.cursor_pos = direction.cycle(self.cursor_pos, self.items.len());
                    self.render(true)?;
                }
                KeyAction::Select => return Ok(self.cursor_pos),
                KeyAction::Cancel => return Err(Error::Canceled),
                KeyAction::Ignore => {}
            }
        }
    }

    fn render(&mut self, rerender: bool) -> Result<()> {
        let last = self.items.len() - 1;

        if rerender && last > 0 {
            // Back to the first item; the last line has no newline.
            queue!(self.writer, MoveUp(rows_up(last)))?;
        }

        for (index, item) in self.items.iter().enumerate() {
            let focused = index == self.cursor_pos;
            let cursor = if focused {
                self.palette
                    .cyan(&format!("{} ", self.options.cursor_char))
                    .to_string()
            } else {
                " ".repeat(self.options.cursor_char.chars().count() + 1)
            };
            let newline = if index == last { "" } else { "\n" };

            queue!(
                self.writer,
                Print(format!(
                    "\r{cursor} {}{newline}",
                    self.palette.item(item, focused)
                ))
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.writer, Clear(ClearType::CurrentLine))?;

        for _ in 1..self.items.len() {
            queue!(
                self.writer,
                MoveToPreviousLine(1),
                Clear(ClearType::CurrentLine)
            )?;
        }

        if self.has_title() {
            queue!(
                self.writer,
                MoveToPreviousLine(1),
                Clear(ClearType::CurrentLine)
            )?;
        }

        Ok(())
    }

    fn write_summary(&mut self, outcome: &Result<usize>) -> Result<()> {
        let (glyph, detail) = match outcome {
            Ok(index) => (
                self.palette.green("✔"),
                self.palette.item(self.items[*index], false).to_string(),
            ),
            Err(Error::Canceled) => (self.palette.red("×"), self.palette.gray("aborted").to_string()),
            Err(_) => {
                // Leave the menu on screen and move below it for the error message.
                queue!(self.writer, Print("\r\n"))?;
                return Ok(());
            }
        };

        self.clear()?;

        let line = if self.has_title() {
            format!("\r{glyph} {} {} {detail}\r\n", self.title, self.palette.gray("›"))
        } else {
            format!("\r{glyph} {detail}\r\n")
        };
        queue!(self.writer, Print(line))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;
    use std::io;

    const HIDE: &str = "\x1b[?25l";
    const SHOW: &str = "\x1b[?25h";
    const PREVIOUS_LINE: &str = "\x1b[1F";

    struct ScriptedKeys(VecDeque<io::Result<KeyEvent>>);

    impl ScriptedKeys {
        fn new(codes: &[KeyCode]) -> Self {
            Self(
                codes
                    .iter()
                    .map(|code| Ok(KeyEvent::new(*code, KeyModifiers::NONE)))
                    .collect(),
            )
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> io::Result<KeyEvent> {
            self.0.pop_front().unwrap_or_else(|| {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
            })
        }
    }

    fn items(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| Item::new(format!("id-{i}"), format!("Item {i}")))
            .collect()
    }

    /// Opens a plain-text menu over `count` items and returns the result and
    /// everything written.
    fn run_menu(count: usize, title: &str, codes: &[KeyCode]) -> (Result<usize>, String) {
        run_menu_with(count, title, codes, &SelectorOptions::default())
    }

    fn run_menu_with(
        count: usize,
        title: &str,
        codes: &[KeyCode],
        options: &SelectorOptions,
    ) -> (Result<usize>, String) {
        let palette = Palette::new(false);
        let owned = items(count);
        let refs: Vec<&Item> = owned.iter().collect();
        let mut output = Vec::new();
        let mut keys = ScriptedKeys::new(codes);

        let result = Selector::new(&mut output, &palette, options, title, &refs).open(&mut keys);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_enter_selects_first_item() {
        let (result, _) = run_menu(3, "", &[KeyCode::Enter]);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_down_moves_cursor() {
        let (result, _) = run_menu(3, "", &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    fn test_up_from_top_wraps_to_bottom() {
        let (result, _) = run_menu(4, "", &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(result.unwrap(), 3);
    }

    #[test]
    fn test_down_from_bottom_wraps_to_top() {
        let (result, _) = run_menu(2, "", &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_full_cycles_return_to_start() {
        for count in 1..=6 {
            let mut downs = vec![KeyCode::Down; count];
            downs.push(KeyCode::Enter);
            assert_eq!(run_menu(count, "", &downs).0.unwrap(), 0);

            let mut ups = vec![KeyCode::Up; count];
            ups.push(KeyCode::Enter);
            assert_eq!(run_menu(count, "", &ups).0.unwrap(), 0);
        }
    }

    #[test]
    fn test_cancel_from_any_position() {
        for count in 1..=5 {
            for position in 0..count {
                for cancel in [KeyCode::Esc, KeyCode::Backspace] {
                    let mut codes = vec![KeyCode::Down; position];
                    codes.push(cancel);
                    let options = SelectorOptions {
                        cancel_on_backspace: true,
                        ..SelectorOptions::default()
                    };

                    let (result, output) = run_menu_with(count, "Pick", &codes, &options);
                    assert!(matches!(result, Err(Error::Canceled)));
                    assert!(output.contains("× Pick › aborted"));
                }
            }
        }
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let palette = Palette::new(false);
        let owned = items(2);
        let refs: Vec<&Item> = owned.iter().collect();
        let options = SelectorOptions::default();
        let mut output = Vec::new();
        let mut keys = ScriptedKeys(VecDeque::from([Ok(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))]));

        let result = Selector::new(&mut output, &palette, &options, "", &refs).open(&mut keys);
        assert!(result.unwrap_err().is_canceled());
    }

    #[test]
    fn test_backspace_ignored_by_default() {
        let (result, _) = run_menu(3, "", &[KeyCode::Backspace, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_other_keys_do_not_move() {
        let (result, output) = run_menu(
            3,
            "",
            &[KeyCode::Char('x'), KeyCode::Left, KeyCode::Tab, KeyCode::Enter],
        );
        assert_eq!(result.unwrap(), 0);
        // Ignored keys do not redraw.
        assert!(!output.contains("\x1b[2A"));
    }

    #[test]
    fn test_input_error_is_not_cancellation_and_restores_cursor() {
        let (result, output) = run_menu(3, "Pick", &[KeyCode::Down]);

        assert!(matches!(result, Err(Error::Input(_))));
        assert!(output.starts_with(HIDE));
        assert!(output.ends_with(SHOW));
        assert!(!output.contains("aborted"));
    }

    #[test]
    fn test_cursor_hidden_then_shown() {
        for codes in [&[KeyCode::Enter][..], &[KeyCode::Esc][..]] {
            let (_, output) = run_menu(2, "Pick", codes);
            assert!(output.starts_with(HIDE));
            assert!(output.ends_with(SHOW));
        }
    }

    #[test]
    fn test_title_drawn_once() {
        let (_, output) = run_menu(3, "Pick one", &[KeyCode::Down, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(output.matches(TITLE_HINT).count(), 1);
    }

    #[test]
    fn test_last_item_has_no_newline() {
        let (_, output) = run_menu(3, "", &[KeyCode::Enter]);
        // Two between the three items, one after the summary.
        assert_eq!(output.matches('\n').count(), 3);
        assert!(output.contains("Item 2\x1b[2K"));
    }

    #[test]
    fn test_rerender_moves_to_first_item() {
        let (_, output) = run_menu(3, "Title", &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(output.matches("\x1b[2A").count(), 2);
        assert_eq!(output.matches("\r>  Item 2").count(), 1);
    }

    #[test]
    fn test_single_item_rerender_stays_in_place() {
        let (result, output) = run_menu(1, "", &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(result.unwrap(), 0);
        assert!(!output.contains("A\r"));
    }

    #[test]
    fn test_clear_removes_items_and_title() {
        let (_, output) = run_menu(4, "Title", &[KeyCode::Enter]);
        assert_eq!(output.matches(PREVIOUS_LINE).count(), 4);

        let (_, output) = run_menu(4, "", &[KeyCode::Enter]);
        assert_eq!(output.matches(PREVIOUS_LINE).count(), 3);
    }

    #[test]
    fn test_success_summary() {
        let (_, output) = run_menu(3, "Select an Image", &[KeyCode::Down, KeyCode::Enter]);
        assert!(output.contains("✔ Select an Image › Item 1\r\n"));

        let (_, output) = run_menu(3, "", &[KeyCode::Enter]);
        assert!(output.contains("✔ Item 0\r\n"));
    }

    #[test]
    fn test_focused_item_marked() {
        let (_, output) = run_menu(2, "", &[KeyCode::Enter]);
        assert!(output.contains("\r>  Item 0\n"));
        assert!(output.contains("\r   Item 1"));
    }

    #[test]
    fn test_custom_cursor_char() {
        let options = SelectorOptions {
            cursor_char: "=>".to_string(),
            ..SelectorOptions::default()
        };
        let (_, output) = run_menu_with(2, "", &[KeyCode::Enter], &options);
        assert!(output.contains("\r=>  Item 0\n"));
        assert!(output.contains("\r    Item 1"));
    }

    #[test]
    fn test_rows_up_saturates() {
        assert_eq!(rows_up(2), 2);
        assert_eq!(rows_up(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(rows_up(usize::from(u16::MAX) + 1), u16::MAX);
        assert_eq!(rows_up(100_000), u16::MAX);
    }

    #[test]
    fn test_empty_menu() {
        let (result, output) = run_menu(0, "Nothing", &[KeyCode::Enter]);
        assert!(matches!(result, Err(Error::EmptyMenu)));
        assert!(output.is_empty());
    }

    #[test]
    fn test_cursor_pos_starts_at_zero() {
        let palette = Palette::new(false);
        let options = SelectorOptions::default();
        let owned = items(3);
        let refs: Vec<&Item> = owned.iter().collect();
        let selector = Selector::new(Vec::new(), &palette, &options, "", &refs);
        assert_eq!(selector.cursor_pos(), 0);
    }

    #[test]
    fn test_colored_focus_is_bold() {
        let palette = Palette::new(true);
        let options = SelectorOptions::default();
        let owned = items(2);
        let refs: Vec<&Item> = owned.iter().collect();
        let mut output = Vec::new();
        let mut keys = ScriptedKeys::new(&[KeyCode::Enter]);

        Selector::new(&mut output, &palette, &options, "", &refs)
            .open(&mut keys)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("\x1b[1mItem 0"));
    }
}
