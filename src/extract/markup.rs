//! Markup Text Extraction
//!
//! Plain-text extraction from wiki page markup (Confluence storage or view
//! format) using `scraper`. Elements in the skip set are dropped together
//! with their text; block-level elements inject a line-break boundary so
//! adjacent blocks do not run together. The output is always a plain string,
//! possibly empty.

use std::sync::LazyLock;

use regex::Regex;
use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Tags whose entire subtree is dropped.
const SKIP_TAGS: [&str; 5] = ["script", "style", "head", "meta", "link"];

/// Block-level tags that inject a fragment boundary.
const BLOCK_TAGS: [&str; 11] = [
    "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr",
];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Extract plain text from a markup string.
///
/// Fragments are trimmed, blanks discarded, and the result joined with
/// single spaces with whitespace runs collapsed. Never errors: empty or
/// unusable input yields an empty string.
pub fn extract_text(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(markup);
    let mut parts: Vec<String> = Vec::new();
    walk(fragment.tree.root(), &mut parts);

    // html5ever recovers from almost any malformed input; the regex pass only
    // fires when parsing produced no usable tree for a non-empty document.
    if parts.is_empty() && !tree_has_content(&fragment) {
        return collapse_whitespace(&strip_tags(markup));
    }

    collapse_whitespace(&parts.join(" "))
}

fn walk(node: NodeRef<'_, Node>, parts: &mut Vec<String>) {
    match node.value() {
        Node::Element(element) => {
            let tag = element.name();
            if SKIP_TAGS.contains(&tag) {
                return;
            }
            if BLOCK_TAGS.contains(&tag) {
                parts.push("\n".to_string());
            }
            for child in node.children() {
                walk(child, parts);
            }
        }
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
        _ => {
            for child in node.children() {
                walk(child, parts);
            }
        }
    }
}

fn tree_has_content(fragment: &Html) -> bool {
    fragment
        .tree
        .root()
        .descendants()
        .any(|node| matches!(node.value(), Node::Element(_) | Node::Text(_)))
}

/// Last-resort tag stripping for markup the parser could not handle.
fn strip_tags(markup: &str) -> String {
    TAG_RE.replace_all(markup, " ").to_string()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}
