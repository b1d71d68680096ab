//! ASCII tree preview of a folder structure.

use crate::structure::{count_nodes, FolderNode};

const TEE: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Renders `tree` one node per line, depth first, in stored order.
///
/// ```
/// use clean_folder::{preview::render_lines, structure::FolderNode};
///
/// const TREE: &[FolderNode] = &[
///     FolderNode::branch("a", &[FolderNode::leaf("b")]),
///     FolderNode::leaf("c"),
/// ];
/// assert_eq!(render_lines(TREE), vec!["├── a", "│   └── b", "└── c"]);
/// ```
pub fn render_lines(tree: &[FolderNode]) -> Vec<String> {
    let mut lines = Vec::with_capacity(count_nodes(tree));
    walk(tree, "", &mut lines);
    lines
}

/// Renders `tree` as a single newline-joined string.
pub fn render(tree: &[FolderNode]) -> String {
    render_lines(tree).join("\n")
}

fn walk(tree: &[FolderNode], prefix: &str, lines: &mut Vec<String>) {
    for (i, node) in tree.iter().enumerate() {
        let is_last = i == tree.len() - 1;
        let branch = if is_last { CORNER } else { TEE };
        lines.push(format!("{}{}{}", prefix, branch, node.name));

        if !node.is_leaf() {
            let child_prefix = format!("{}{}", prefix, if is_last { BLANK } else { PIPE });
            walk(node.children, &child_prefix, lines);
        }
    }
}
