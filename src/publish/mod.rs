//! Publication Adapter
//!
//! Converts a validated summary into a Confluence page: title resolution
//! (URL-embedded title wins over the model's), folder-target verification
//! with graceful degrade, and a single non-idempotent page-creation call.

pub mod adf;

pub use adf::build_document;

use std::sync::LazyLock;
use std::time::Duration;

use percent_encoding::percent_decode_str;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::ConfluenceConfig;
use crate::types::{BriefError, Result, SummaryResult};

const PUBLISH_TIMEOUT: Duration = Duration::from_secs(30);

/// Title segment between full-width brackets, e.g. `【EventName】`.
static TITLE_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("【([^】]+)】").unwrap());

/// Extract a bracketed title segment from a (possibly URL-encoded) URL.
pub fn extract_title_from_url(url: &str) -> Option<String> {
    let decoded = percent_decode_str(url).decode_utf8_lossy();
    TITLE_SEGMENT_RE
        .captures(&decoded)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|candidate| !candidate.is_empty())
}

/// Resolve the page title: a bracketed segment in the source URL wins over
/// the model-produced title.
pub fn resolve_title(result: &SummaryResult, url: &str) -> String {
    extract_title_from_url(url).unwrap_or_else(|| result.title.trim().to_string())
}

// =============================================================================
// Publisher
// =============================================================================

#[derive(Debug, Deserialize)]
struct CreatedPage {
    #[serde(rename = "_links", default)]
    links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
struct PageLinks {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    webui: Option<String>,
}

/// Client for publishing pages to Confluence Cloud.
pub struct Publisher {
    base_url: String,
    space_key: String,
    username: String,
    api_token: SecretString,
    folder_id: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("base_url", &self.base_url)
            .field("space_key", &self.space_key)
            .field("username", &self.username)
            .field("api_token", &"[REDACTED]")
            .field("folder_id", &self.folder_id)
            .finish()
    }
}

impl Publisher {
    pub fn new(config: &ConfluenceConfig) -> Result<Self> {
        let (username, api_token) = config.credentials()?;

        let client = reqwest::Client::builder()
            .timeout(PUBLISH_TIMEOUT)
            .build()
            .map_err(|e| BriefError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            space_key: config.space_key.clone(),
            username,
            api_token,
            folder_id: config.folder_id.clone(),
            client,
        })
    }

    /// Check whether the configured parent folder exists and is accessible.
    /// Any failure counts as inaccessible: the folder is dropped, never fatal.
    async fn folder_accessible(&self, folder_id: &str) -> bool {
        let url = format!("{}/rest/api/content/{}", self.base_url, folder_id);
        match self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(self.api_token.expose_secret()))
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Publish the summary as a new page and return its canonical URL.
    ///
    /// Page creation is a single non-idempotent call: every invocation
    /// creates a new page.
    pub async fn publish(&self, result: &SummaryResult, source_url: &str) -> Result<String> {
        let title = resolve_title(result, source_url);
        if title.is_empty() {
            return Err(BriefError::publish("page title is empty"));
        }

        let parent_folder = match &self.folder_id {
            Some(folder_id) if self.folder_accessible(folder_id).await => {
                Some(folder_id.clone())
            }
            Some(folder_id) => {
                warn!(folder_id, "folder not accessible, publishing as top-level page");
                None
            }
            None => None,
        };

        let document = build_document(result);
        let mut payload = json!({
            "type": "page",
            "title": title,
            "space": {"key": self.space_key},
            "body": {
                "atlas_doc_format": {
                    "value": serde_json::to_string(&document)?,
                    "representation": "atlas_doc_format",
                }
            },
        });
        if let Some(folder_id) = parent_folder {
            payload["ancestors"] = json!([{"id": folder_id}]);
        }

        let endpoint = format!("{}/rest/api/content", self.base_url);
        debug!(%title, "creating Confluence page");

        let response = self
            .client
            .post(&endpoint)
            .basic_auth(&self.username, Some(self.api_token.expose_secret()))
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| BriefError::publish(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BriefError::publish(format!("status {}: {}", status, body)));
        }

        let created: CreatedPage = response
            .json()
            .await
            .map_err(|e| BriefError::publish(format!("malformed creation response: {}", e)))?;

        let base = created
            .links
            .base
            .unwrap_or_else(|| self.base_url.clone());
        let webui = created.links.webui.unwrap_or_default();
        let page_url = format!("{}{}", base, webui);

        info!(%page_url, "page created");
        Ok(page_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QAItem;

    fn sample() -> SummaryResult {
        SummaryResult {
            title: "Model Title".to_string(),
            plan: vec!["a".into(), "b".into(), "c".into()],
            summary: vec![
                "one.".into(),
                "two.".into(),
                "three.".into(),
                "four.".into(),
                "five.".into(),
            ],
            qa: vec![
                QAItem {
                    question: "Q1?".into(),
                    answer: "A1.".into(),
                },
                QAItem {
                    question: "Q2?".into(),
                    answer: "A2.".into(),
                },
                QAItem {
                    question: "Q3?".into(),
                    answer: "A3.".into(),
                },
            ],
        }
    }

    #[test]
    fn test_bracketed_segment_wins_over_model_title() {
        let title = resolve_title(&sample(), "https://www.figma.com/file/abc/【EventName】notes");
        assert_eq!(title, "EventName");
    }

    #[test]
    fn test_url_encoded_segment_decoded_first() {
        // 【活動】 percent-encoded
        let url = "https://www.figma.com/file/abc/%E3%80%90%E6%B4%BB%E5%8B%95%E3%80%91-page";
        assert_eq!(extract_title_from_url(url), Some("活動".to_string()));
    }

    #[test]
    fn test_model_title_fallback_when_no_segment() {
        let title = resolve_title(&sample(), "https://www.figma.com/file/abc/plain-name");
        assert_eq!(title, "Model Title");
    }

    #[test]
    fn test_blank_bracket_segment_ignored() {
        assert_eq!(
            extract_title_from_url("https://example.test/【 】rest"),
            None
        );
    }

    #[test]
    fn test_created_page_links_deserialize() {
        let created: CreatedPage = serde_json::from_str(
            r#"{"id": "1", "_links": {"base": "https://acme.atlassian.net/wiki", "webui": "/spaces/A/pages/1"}}"#,
        )
        .unwrap();
        assert_eq!(
            created.links.base.as_deref(),
            Some("https://acme.atlassian.net/wiki")
        );
        assert_eq!(created.links.webui.as_deref(), Some("/spaces/A/pages/1"));
    }
}
