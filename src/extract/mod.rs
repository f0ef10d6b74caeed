//! Content Extraction
//!
//! Flattens heterogeneous source documents into a single aggregated string of
//! labeled sections, the unit of content handed to the prompt:
//!
//! - [`tree`]: depth-first flattening of design-tool node trees plus
//!   named-subtree selection for scoped extraction.
//! - [`markup`]: plain-text extraction from wiki page markup.
//!
//! Extraction never fails: unparsable or empty input yields sentinel text,
//! not an error.

pub mod markup;
pub mod tree;

pub use tree::{collapse_text_nodes, find_node_by_names};

/// Placeholder body for a document-text section without any text nodes.
pub const NO_TEXT_NODES: &str = "(no text nodes)";

/// Placeholder for a matched target section that has no text content.
/// Substituted instead of silently widening back to the full document.
pub const EMPTY_TARGET: &str = "(target section has no text content)";

/// Placeholder when no section of the document yields any content.
pub const CONTENT_UNAVAILABLE: &str = "(document content unavailable)";

/// A labeled block of aggregated content.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: &'static str,
    pub body: String,
}

impl Section {
    pub fn new(name: &'static str, body: impl Into<String>) -> Self {
        Self {
            name,
            body: body.into(),
        }
    }
}

/// Join sections into the aggregated-content string.
///
/// Each non-empty section renders as a `=== name ===` header line followed by
/// its body; sections are separated by a blank line. Empty sections are
/// omitted (callers that must always appear pass a sentinel body). If nothing
/// remains, the whole aggregate is the unavailable sentinel.
pub fn join_sections(sections: &[Section]) -> String {
    let rendered: Vec<String> = sections
        .iter()
        .filter(|section| !section.body.trim().is_empty())
        .map(|section| format!("=== {} ===\n{}", section.name, section.body))
        .collect();

    if rendered.is_empty() {
        return CONTENT_UNAVAILABLE.to_string();
    }
    rendered.join("\n\n")
}
