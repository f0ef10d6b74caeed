//! Source Content Providers
//!
//! Thin REST clients for the two supported document sources, plus URL
//! classification. Each source module also owns the aggregation policy that
//! turns its raw document into the sectioned content string handed to the
//! prompt.

pub mod confluence;
pub mod figma;

pub use confluence::{ConfluenceClient, extract_page_id, is_confluence_url};
pub use figma::{FigmaClient, extract_file_key};

use url::Url;

use crate::types::{BriefError, Result};

/// Kind of source document, drives prompt template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Design-tool document (Figma).
    Design,
    /// Wiki page (Confluence).
    Wiki,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Design => write!(f, "design"),
            SourceKind::Wiki => write!(f, "wiki"),
        }
    }
}

/// Classify a raw URL as one of the supported sources.
///
/// Returns `SourceUnresolvable` for anything that is not a well-formed URL
/// pointing at a recognizable Figma file or Confluence page.
pub fn classify(url: &str) -> Result<SourceKind> {
    Url::parse(url).map_err(|_| BriefError::SourceUnresolvable(url.to_string()))?;

    if is_confluence_url(url) && extract_page_id(url).is_some() {
        return Ok(SourceKind::Wiki);
    }
    if extract_file_key(url).is_some() {
        return Ok(SourceKind::Design);
    }
    Err(BriefError::SourceUnresolvable(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_figma_url() {
        let kind = classify("https://www.figma.com/design/a1B2c3/My-File").unwrap();
        assert_eq!(kind, SourceKind::Design);
    }

    #[test]
    fn test_classify_confluence_url() {
        let kind =
            classify("https://acme.atlassian.net/wiki/spaces/ACS/pages/12345/Title").unwrap();
        assert_eq!(kind, SourceKind::Wiki);
    }

    #[test]
    fn test_classify_unknown_url() {
        assert!(matches!(
            classify("https://example.com/nothing"),
            Err(BriefError::SourceUnresolvable(_))
        ));
    }

    #[test]
    fn test_classify_invalid_url() {
        assert!(matches!(
            classify("not a url"),
            Err(BriefError::SourceUnresolvable(_))
        ));
    }
}
