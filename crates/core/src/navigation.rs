//! Walking the selection tree one level at a time.

use log::debug;

use crate::error::{Error, Result};
use crate::selection_tree::{Item, SelectionNode};

/// Something that can ask the user to pick one item out of a list.
///
/// Implementations return the index of the chosen item, or
/// [`Error::Canceled`] when the user backs out.
pub trait Chooser {
    fn choose(&mut self, title: &str, items: &[&Item]) -> Result<usize>;
}

/// Walks from the root down to a leaf, asking `chooser` for one choice per
/// level.
///
/// The returned path excludes the root and is in the order the user
/// descended. A cancellation anywhere aborts the whole walk.
///
/// # Errors
///
/// Returns [`Error::Canceled`] when the user backs out, whatever error the
/// chooser reports, or [`Error::InvalidChoice`] if the chooser answers with an
/// index outside the menu.
pub fn walk<'a, C: Chooser + ?Sized>(
    root: &'a SelectionNode,
    chooser: &mut C,
) -> Result<Vec<&'a SelectionNode>> {
    let mut path = Vec::new();
    let mut current = root;

    while !current.is_leaf() {
        let items = current.child_items();
        let index = chooser.choose(&current.title, &items)?;

        let (_, chosen) = current
            .children
            .get_index(index)
            .ok_or(Error::InvalidChoice {
                index,
                count: items.len(),
            })?;

        debug!("Level {}: chose `{}`", path.len() + 1, chosen.id());
        path.push(chosen);
        current = chosen;
    }

    Ok(path)
}
