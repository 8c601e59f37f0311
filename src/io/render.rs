//! Human-readable tree rendering

use crate::source::Entry;

/// Render `entry` and its descendants, one node per line.
///
/// Each level is indented by two spaces. Nodes deeper than `max_depth`
/// (root is depth 0) are left out.
pub fn render_tree(entry: &Entry, max_depth: Option<usize>) -> String {
    entry
        .walk()
        .filter(|(depth, _)| max_depth.is_none_or(|max| *depth <= max))
        .map(|(depth, node)| render_line(depth, node))
        .collect()
}

fn render_line(depth: usize, node: &Entry) -> String {
    let indent = "  ".repeat(depth);
    match &node.span {
        Some(span) => format!("{indent}{} [{span}]\n", node.kind),
        None => format!("{indent}{}\n", node.kind),
    }
}
