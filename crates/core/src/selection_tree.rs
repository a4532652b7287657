//! The menu tree that the user walks through.
//!
//! A [`SelectionNode`] owns its children outright, keyed by child id in
//! declaration order. The tree is built once by
//! [`crate::file_handling::get_selection_tree`] and never mutated afterwards.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Deserialize;

/// One selectable menu line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    /// Unique among siblings, never empty once loaded.
    pub id: String,
    pub display: String,
    /// Symbolic color name, resolved by the front end.
    pub color: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Display for Item {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.display)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionNode {
    /// Meaningless on the root, which is never offered as a choice.
    pub item: Item,
    pub title: String,
    pub children: IndexMap<String, SelectionNode>,
    /// Overrides whatever template was in effect when this node is chosen.
    pub command: Option<String>,
    pub value: Option<String>,
}

impl SelectionNode {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The string substituted for this node's placeholder.
    ///
    /// Falls back to the id, so a configuration without explicit values still
    /// builds the same command on every run.
    pub fn resolved_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.item.id)
    }

    /// The non-empty command template carried by this node, if any.
    pub fn command_template(&self) -> Option<&str> {
        self.command.as_deref().filter(|command| !command.is_empty())
    }

    /// Child items in menu order.
    pub fn child_items(&self) -> Vec<&Item> {
        self.children.values().map(|child| &child.item).collect()
    }

    /// Inserts a child under its id. A child already using that id is
    /// replaced and returned.
    pub fn insert_child(&mut self, child: Self) -> Option<Self> {
        self.children.insert(child.item.id.clone(), child)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.insert_child(child);
        self
    }
}

/// A node exactly as written in the configuration file.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct NodeDefinition {
    pub id: Option<String>,
    pub display: Option<String>,
    pub color: Option<String>,
    pub value: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "command")]
    pub cmd: Option<String>,
    #[serde(default, alias = "children")]
    pub blocks: Vec<NodeDefinition>,
}
