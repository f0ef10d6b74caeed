//! Content Tree Node
//!
//! The design tool returns a loosely-typed node tree: every field may be
//! missing. Defaults keep traversal total — a node without `children`
//! deserializes to an empty vector and is treated as a leaf.

use serde::Deserialize;

/// Discriminator value for leaf text nodes.
pub const TEXT_NODE_TYPE: &str = "TEXT";

/// A node in a design document's content tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentNode {
    /// Node type discriminator (`TEXT`, `FRAME`, `CANVAS`, ...).
    #[serde(rename = "type", default)]
    pub node_type: String,

    /// Optional node label.
    #[serde(default)]
    pub name: String,

    /// Leaf text payload. Figma calls this `characters`.
    #[serde(default)]
    pub characters: String,

    /// Ordered child nodes. Absent in leaf nodes.
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Whether this node carries leaf text.
    pub fn is_text(&self) -> bool {
        self.node_type == TEXT_NODE_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_children() {
        let node: ContentNode =
            serde_json::from_str(r#"{"type": "TEXT", "name": "Title", "characters": "Hello"}"#)
                .unwrap();
        assert!(node.is_text());
        assert_eq!(node.name, "Title");
        assert_eq!(node.characters, "Hello");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_deserialize_nested() {
        let node: ContentNode = serde_json::from_str(
            r#"{
                "type": "FRAME",
                "name": "Root",
                "children": [
                    {"type": "TEXT", "characters": "a"},
                    {"type": "GROUP", "children": []}
                ]
            }"#,
        )
        .unwrap();
        assert!(!node.is_text());
        assert_eq!(node.children.len(), 2);
        assert!(node.children[0].is_text());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let node: ContentNode = serde_json::from_str(
            r#"{"type": "TEXT", "characters": "x", "absoluteBoundingBox": {"x": 1}}"#,
        )
        .unwrap();
        assert_eq!(node.characters, "x");
    }
}
