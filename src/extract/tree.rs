//! Tree Flattening and Subtree Selection
//!
//! Depth-first pre-order traversal over [`ContentNode`] trees. Traversal is
//! total: nodes without children are leaves, and no node shape can make it
//! error.

use crate::types::ContentNode;

/// Flatten a content tree into ordered text fragments.
///
/// Visits nodes depth-first, pre-order, children in document order. A text
/// node with non-empty trimmed content emits one fragment, prefixed with
/// `"{name}: "` when the node carries a non-empty name.
pub fn collapse_text_nodes(node: &ContentNode, fragments: &mut Vec<String>) {
    if node.is_text() {
        let text = node.characters.trim();
        if !text.is_empty() {
            let name = node.name.trim();
            if name.is_empty() {
                fragments.push(text.to_string());
            } else {
                fragments.push(format!("{name}: {text}"));
            }
        }
    }
    for child in &node.children {
        collapse_text_nodes(child, fragments);
    }
}

/// Find the first node whose name is in the candidate list.
///
/// Pre-order search: the current node is checked before its children, so the
/// shallowest match wins, and among siblings the leftmost. Membership is
/// exact; no fuzzy matching.
pub fn find_node_by_names<'a>(
    node: &'a ContentNode,
    names: &[String],
) -> Option<&'a ContentNode> {
    if names.iter().any(|name| *name == node.name) {
        return Some(node);
    }
    node.children
        .iter()
        .find_map(|child| find_node_by_names(child, names))
}
