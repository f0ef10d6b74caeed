//! Confluence Source Provider
//!
//! Page-id extraction, the REST client for fetching page content, and the
//! aggregation policy that turns a page into sectioned text. The body is
//! read from the `storage` representation first, falling back to `view`
//! only when storage is absent or empty.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::config::ConfluenceConfig;
use crate::extract::{self, Section, markup};
use crate::types::{BriefError, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

static PAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"atlassian\.net/wiki/spaces/[^/]+/pages/(\d+)").unwrap());

/// Extract the page id from a Confluence page URL.
pub fn extract_page_id(url: &str) -> Option<&str> {
    PAGE_URL_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Whether a URL points at a Confluence instance.
pub fn is_confluence_url(url: &str) -> bool {
    url.contains("atlassian.net")
}

// =============================================================================
// Page payload
// =============================================================================

/// A fetched Confluence page with its body representations and metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub space: Space,
    #[serde(default)]
    pub body: PageBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Space {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageBody {
    #[serde(default)]
    pub storage: BodyContent,
    #[serde(default)]
    pub view: BodyContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyContent {
    #[serde(default)]
    pub value: String,
}

// =============================================================================
// Client
// =============================================================================

/// REST client for fetching Confluence page content.
pub struct ConfluenceClient {
    base_url: String,
    username: String,
    api_token: SecretString,
    client: reqwest::Client,
}

impl std::fmt::Debug for ConfluenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfluenceClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl ConfluenceClient {
    pub fn new(config: &ConfluenceConfig) -> Result<Self> {
        let (username, api_token) = config.credentials()?;

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| BriefError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username,
            api_token,
            client,
        })
    }

    /// Fetch page content by id, expanded with both body representations.
    pub async fn fetch_page(&self, page_id: &str) -> Result<Page> {
        let url = format!("{}/rest/api/content/{}", self.base_url, page_id);
        debug!(page_id, "fetching Confluence page");

        let response = self
            .client
            .get(&url)
            .query(&[("expand", "body.storage,body.view,version,space")])
            .basic_auth(&self.username, Some(self.api_token.expose_secret()))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BriefError::fetch("confluence", e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BriefError::fetch(
                "confluence",
                format!("status {}: {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| BriefError::fetch("confluence", format!("invalid page payload: {}", e)))
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Aggregate a Confluence page into sectioned text.
///
/// Sections with no content are omitted; a page with nothing at all yields
/// the unavailable sentinel.
pub fn aggregate_page(page: &Page) -> String {
    let storage = page.body.storage.value.trim();
    let body_markup = if storage.is_empty() {
        page.body.view.value.as_str()
    } else {
        &page.body.storage.value
    };

    extract::join_sections(&[
        Section::new("Page Title", page.title.trim()),
        Section::new("Space", page.space.name.trim()),
        Section::new("Document Text", markup::extract_text(body_markup)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_page_id() {
        let id = extract_page_id("https://acme.atlassian.net/wiki/spaces/ACS/pages/123456789/Page+Title");
        assert_eq!(id, Some("123456789"));
    }

    #[test]
    fn test_extract_page_id_without_title_segment() {
        let id = extract_page_id("https://acme.atlassian.net/wiki/spaces/ACS/pages/42");
        assert_eq!(id, Some("42"));
    }

    #[test]
    fn test_extract_page_id_rejects_other_urls() {
        assert!(extract_page_id("https://acme.atlassian.net/browse/ACS-1").is_none());
    }

    #[test]
    fn test_is_confluence_url() {
        assert!(is_confluence_url("https://acme.atlassian.net/wiki/spaces/X/pages/1"));
        assert!(!is_confluence_url("https://www.figma.com/file/abc"));
    }

    fn page(title: &str, space: &str, storage: &str, view: &str) -> Page {
        serde_json::from_str(&serde_json::json!({
            "title": title,
            "space": {"name": space},
            "body": {
                "storage": {"value": storage},
                "view": {"value": view}
            }
        }).to_string())
        .unwrap()
    }

    #[test]
    fn test_aggregate_prefers_storage_format() {
        let aggregated = aggregate_page(&page(
            "Release Notes",
            "Engineering",
            "<p>from storage</p>",
            "<p>from view</p>",
        ));
        assert!(aggregated.contains("=== Page Title ===\nRelease Notes"));
        assert!(aggregated.contains("=== Space ===\nEngineering"));
        assert!(aggregated.contains("=== Document Text ===\nfrom storage"));
        assert!(!aggregated.contains("from view"));
    }

    #[test]
    fn test_aggregate_falls_back_to_view() {
        let aggregated = aggregate_page(&page("T", "", "", "<p>view only</p>"));
        assert!(aggregated.contains("=== Document Text ===\nview only"));
    }

    #[test]
    fn test_aggregate_empty_page_yields_sentinel() {
        let aggregated = aggregate_page(&Page::default());
        assert_eq!(aggregated, extract::CONTENT_UNAVAILABLE);
    }

    #[test]
    fn test_aggregate_omits_missing_space() {
        let aggregated = aggregate_page(&page("Title", "", "<p>body</p>", ""));
        assert!(!aggregated.contains("=== Space ==="));
    }
}
