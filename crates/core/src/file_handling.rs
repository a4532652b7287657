//! Reading the selection tree from its configuration file.
//!
//! The file is YAML (JSON works too, being valid YAML). Nodes are converted
//! into [`SelectionNode`]s keyed by id, generating ids where the file leaves
//! them out.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::selection_tree::{Item, NodeDefinition, SelectionNode};

/// Prefix of ids generated for nodes that do not declare one.
const GENERATED_ID_PREFIX: &str = "item";

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Picks an id for the sibling at `position` (1-based) that has none.
///
/// Ids are positional rather than random so the same file always yields the
/// same tree, and therefore the same commands.
fn generate_id(position: usize, taken: &HashSet<String>) -> String {
    let candidate = format!("{GENERATED_ID_PREFIX}-{position}");
    let mut id = candidate.clone();
    let mut suffix = 0;

    while taken.contains(&id) {
        suffix += 1;
        id = format!("{candidate}-{suffix}");
    }

    id
}

fn build_item(definition: &NodeDefinition, id: String) -> Item {
    Item {
        display: definition.display.clone().unwrap_or_else(|| id.clone()),
        color: definition.color.clone().filter(|color| !color.is_empty()),
        id,
    }
}

fn build_node(definition: &NodeDefinition, id: String) -> SelectionNode {
    let mut node = SelectionNode::new(build_item(definition, id));
    node.title = definition.title.clone().unwrap_or_default();
    node.command = definition.cmd.clone();
    node.value = definition.value.clone();

    let mut taken: HashSet<String> = definition
        .blocks
        .iter()
        .filter_map(|child| child.id.clone())
        .filter(|id| !id.is_empty())
        .collect();

    for (index, child) in definition.blocks.iter().enumerate() {
        let child_id = match child.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let generated = generate_id(index + 1, &taken);
                debug!("Generated id `{generated}` for an entry without one");
                taken.insert(generated.clone());
                generated
            }
        };

        if let Some(replaced) = node.insert_child(build_node(child, child_id)) {
            warn!(
                "Duplicate id `{}`: `{}` replaces `{}`",
                replaced.id(),
                node.children[replaced.id()].item.display,
                replaced.item.display
            );
        }
    }

    node
}

/// Converts a parsed configuration document into the selection tree.
///
/// The returned node is the root; only its descendants are ever offered as
/// choices.
pub fn build_selection_tree(definition: &NodeDefinition) -> SelectionNode {
    let root_id = definition.id.clone().unwrap_or_default();
    build_node(definition, root_id)
}

/// Parses a configuration document held in memory.
///
/// # Errors
///
/// Returns an error if the text is not a valid configuration document.
pub fn parse_selection_tree(content: &str, path: &str) -> Result<SelectionNode> {
    let definition: NodeDefinition = serde_yaml::from_str(content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            path.to_string(),
            e,
        )
    })?;

    Ok(build_selection_tree(&definition))
}

/// Loads the selection tree from a configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
///
/// # Examples
///
/// ```no_run
/// use selto_core::file_handling::get_selection_tree;
///
/// let root = get_selection_tree("/home/me/.config/selto/config.yaml")?;
/// println!("{} top level entries", root.children.len());
/// # Ok::<(), selto_core::error::Error>(())
/// ```
pub fn get_selection_tree(config_path: &str) -> Result<SelectionNode> {
    if !Path::exists(Path::new(config_path)) {
        return Err(Error::config_not_found(config_path.to_string()));
    }

    let config_reader = get_reader("config", config_path)?;

    let definition: NodeDefinition = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    debug!(
        "Loaded config `{}` with {} top level entries",
        config_path,
        definition.blocks.len()
    );

    Ok(build_selection_tree(&definition))
}
