//! Drawing the shape of a tree as text, sideways: the right subtree above a node and the left
//! subtree below it.
//!
//! ```
//! use ordered_tree::{pretty, Tree};
//!
//! let tree = Tree::from_values([1, 2, 3]);
//! assert_eq!(
//!     pretty::render(tree.root()),
//!     vec!["│   ┌── 3", "└── 2", "    └── 1"],
//! );
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

/// Renders the subtree under `root` into display lines, top to bottom. An empty tree renders
/// to no lines at all.
pub fn render<T>(root: Option<&Node<T>>) -> Vec<String>
where
    T: fmt::Display,
{
    let mut lines = Vec::new();
    if let Some(root) = root {
        render_node(root, "", true, &mut lines);
    }
    lines
}

/// `is_left` says whether `node` hangs below its parent's line, which decides the elbow drawn
/// before it and which side of it keeps the parent's vertical bar.
fn render_node<T>(node: &Node<T>, prefix: &str, is_left: bool, lines: &mut Vec<String>)
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let bar = if is_left { "│   " } else { "    " };
        render_node(right, &format!("{prefix}{bar}"), false, lines);
    }

    let elbow = if is_left { "└── " } else { "┌── " };
    lines.push(format!("{prefix}{elbow}{}", node.data()));

    if let Some(left) = node.left() {
        let bar = if is_left { "    " } else { "│   " };
        render_node(left, &format!("{prefix}{bar}"), true, lines);
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    /// Writes [`render`]'s lines, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render(self.root()) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
