use log::debug;

use crate::selection_tree::SelectionNode;

/// Replaces every `$<position>` in `command` with `value`.
///
/// `$1` is only replaced where it is not the start of a longer index such as
/// `$10`.
pub fn replace_placeholder(command: &str, position: usize, value: &str) -> String {
    let placeholder = format!("${position}");
    let mut interpolated = String::with_capacity(command.len());
    let mut rest = command;

    while let Some(start) = rest.find(&placeholder) {
        let end = start + placeholder.len();
        interpolated.push_str(&rest[..start]);

        if rest[end..].starts_with(|c: char| c.is_ascii_digit()) {
            interpolated.push_str(&placeholder);
        } else {
            interpolated.push_str(value);
        }

        rest = &rest[end..];
    }

    interpolated.push_str(rest);
    interpolated
}

/// Builds the final command from the base template and the chosen path.
///
/// Nodes are applied in order with 1-based positions. A node carrying its own
/// template replaces the working command, and the new template is filled in
/// with the values of every node chosen so far, itself included. The last
/// template on the path wins. Placeholders without a node at their position
/// are left as written.
pub fn build_command(base_command: &str, path: &[&SelectionNode]) -> String {
    let mut command = base_command.to_string();

    for (index, node) in path.iter().enumerate() {
        let position = index + 1;

        if let Some(template) = node.command_template() {
            debug!("`{}` overrides the command with `{template}`", node.id());
            command = path[..index]
                .iter()
                .enumerate()
                .fold(template.to_string(), |command, (earlier, chosen)| {
                    replace_placeholder(&command, earlier + 1, chosen.resolved_value())
                });
        }

        command = replace_placeholder(&command, position, node.resolved_value());
    }

    command
}
