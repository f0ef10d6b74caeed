//! Figma Source Provider
//!
//! File-key extraction, the REST client for fetching a file's node tree, and
//! the aggregation policy that flattens the tree into sectioned text.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::config::FigmaConfig;
use crate::extract::{self, Section};
use crate::types::{BriefError, ContentNode, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

static FILE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"figma\.com/(?:file|design)/([A-Za-z0-9]+)").unwrap());

/// Extract the file key from a Figma file or design URL.
pub fn extract_file_key(url: &str) -> Option<&str> {
    FILE_URL_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

// =============================================================================
// File payload
// =============================================================================

/// A fetched Figma file: the document tree plus component and style maps.
///
/// `BTreeMap` keeps key order deterministic in the aggregated output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FigmaFile {
    #[serde(default)]
    pub document: ContentNode,
    #[serde(default)]
    pub components: BTreeMap<String, ComponentMeta>,
    #[serde(default)]
    pub styles: BTreeMap<String, StyleMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentMeta {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleMeta {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "styleType", default)]
    pub style_type: String,
}

// =============================================================================
// Client
// =============================================================================

/// REST client for the Figma file API.
pub struct FigmaClient {
    access_token: SecretString,
    api_base: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for FigmaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigmaClient")
            .field("access_token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl FigmaClient {
    pub fn new(config: &FigmaConfig) -> Result<Self> {
        let token = config
            .access_token
            .clone()
            .or_else(|| std::env::var("FIGMA_ACCESS_TOKEN").ok())
            .ok_or_else(|| {
                BriefError::Config(
                    "Figma access token not found. Set FIGMA_ACCESS_TOKEN env var or provide in config".to_string(),
                )
            })?;

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| BriefError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            access_token: SecretString::from(token),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch a file's full node tree by file key.
    pub async fn fetch_file(&self, file_key: &str) -> Result<FigmaFile> {
        let url = format!("{}/files/{}", self.api_base, file_key);
        debug!(file_key, "fetching Figma file");

        let response = self
            .client
            .get(&url)
            .header("X-FIGMA-TOKEN", self.access_token.expose_secret())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BriefError::fetch("figma", e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BriefError::fetch(
                "figma",
                format!("status {}: {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| BriefError::fetch("figma", format!("invalid file payload: {}", e)))
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Aggregate a full Figma file into sectioned text.
///
/// The Document Text section always appears, using a sentinel body when the
/// tree has no text nodes; Components and Styles sections appear only when
/// their maps are non-empty.
pub fn aggregate_file(file: &FigmaFile) -> String {
    let mut fragments = Vec::new();
    extract::collapse_text_nodes(&file.document, &mut fragments);

    let document_text = if fragments.is_empty() {
        extract::NO_TEXT_NODES.to_string()
    } else {
        fragments.join("\n")
    };

    let component_info = file
        .components
        .iter()
        .map(|(key, meta)| format!("Component {}: {}", key, meta.name))
        .collect::<Vec<_>>()
        .join("\n");

    let style_info = file
        .styles
        .iter()
        .map(|(key, meta)| format!("Style {}: {} ({})", key, meta.name, meta.style_type))
        .collect::<Vec<_>>()
        .join("\n");

    extract::join_sections(&[
        Section::new("Document Text", document_text),
        Section::new("Components", component_info),
        Section::new("Styles", style_info),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_file_key_from_file_url() {
        let key = extract_file_key("https://www.figma.com/file/a1B2c3D4/Campaign");
        assert_eq!(key, Some("a1B2c3D4"));
    }

    #[test]
    fn test_extract_file_key_from_design_url() {
        let key = extract_file_key("https://www.figma.com/design/XyZ987/Event?node-id=1");
        assert_eq!(key, Some("XyZ987"));
    }

    #[test]
    fn test_extract_file_key_rejects_other_urls() {
        assert!(extract_file_key("https://example.com/file/abc").is_none());
    }

    #[test]
    fn test_aggregate_empty_file_uses_sentinel() {
        let aggregated = aggregate_file(&FigmaFile::default());
        assert_eq!(
            aggregated,
            format!("=== Document Text ===\n{}", extract::NO_TEXT_NODES)
        );
    }

    #[test]
    fn test_aggregate_includes_components_and_styles() {
        let file: FigmaFile = serde_json::from_str(
            r#"{
                "document": {
                    "type": "DOCUMENT",
                    "children": [{"type": "TEXT", "name": "Title", "characters": "Hello"}]
                },
                "components": {"1:2": {"name": "Button"}},
                "styles": {"3:4": {"name": "Body", "styleType": "TEXT"}}
            }"#,
        )
        .unwrap();

        let aggregated = aggregate_file(&file);
        assert!(aggregated.contains("=== Document Text ===\nTitle: Hello"));
        assert!(aggregated.contains("=== Components ===\nComponent 1:2: Button"));
        assert!(aggregated.contains("=== Styles ===\nStyle 3:4: Body (TEXT)"));
    }

    #[test]
    fn test_aggregate_omits_empty_maps() {
        let file: FigmaFile = serde_json::from_str(
            r#"{"document": {"type": "TEXT", "characters": "only text"}}"#,
        )
        .unwrap();
        let aggregated = aggregate_file(&file);
        assert!(!aggregated.contains("=== Components ==="));
        assert!(!aggregated.contains("=== Styles ==="));
    }
}
