//! Configuration Types
//!
//! All configuration structures with sensible defaults. Secrets may come
//! from config files or from the conventional environment variables
//! (`OPENAI_API_KEY`, `FIGMA_ACCESS_TOKEN`, `CONFLUENCE_USERNAME`,
//! `CONFLUENCE_API_KEY`).

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::ai::prompt;
use crate::types::{BriefError, Result};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language model settings.
    pub llm: LlmConfig,

    /// Figma source settings.
    pub figma: FigmaConfig,

    /// Confluence source and publication settings.
    pub confluence: ConfluenceConfig,

    /// Prompt templates and content-scoping candidates.
    pub prompts: PromptConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(BriefError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.timeout_secs == 0 {
            return Err(BriefError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key. Falls back to the OPENAI_API_KEY env var when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Chat Completions endpoint base.
    pub api_base: String,

    /// Model identifier.
    pub model: String,

    /// Decoding temperature. Near-zero default for reproducible output.
    pub temperature: f32,

    /// Optional completion token cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4.1-mini".to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout_secs: 30,
        }
    }
}

// =============================================================================
// Figma Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigmaConfig {
    /// Personal access token. Falls back to FIGMA_ACCESS_TOKEN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// REST API base.
    pub api_base: String,
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_base: "https://api.figma.com/v1".to_string(),
        }
    }
}

// =============================================================================
// Confluence Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfluenceConfig {
    /// Instance base URL, e.g. `https://acme.atlassian.net/wiki`.
    pub base_url: String,

    /// Space key new pages are created in.
    pub space_key: String,

    /// Account username. Falls back to CONFLUENCE_USERNAME.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// API token. Falls back to CONFLUENCE_API_KEY.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Optional parent folder id for published pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl ConfluenceConfig {
    /// Resolve credentials from config or environment.
    pub fn credentials(&self) -> Result<(String, SecretString)> {
        let username = self
            .username
            .clone()
            .or_else(|| std::env::var("CONFLUENCE_USERNAME").ok());
        let api_token = self
            .api_token
            .clone()
            .or_else(|| std::env::var("CONFLUENCE_API_KEY").ok());

        match (username, api_token) {
            (Some(username), Some(token)) => Ok((username, SecretString::from(token))),
            _ => Err(BriefError::Config(
                "Confluence credentials not found. Set CONFLUENCE_USERNAME and CONFLUENCE_API_KEY env vars or provide in config".to_string(),
            )),
        }
    }
}

// =============================================================================
// Prompt Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// System prompt for design-document summarization.
    pub design_system: String,

    /// Human template for design-document summarization.
    pub design_template: String,

    /// System prompt for wiki-page summarization.
    pub wiki_system: String,

    /// Human template for wiki-page summarization.
    pub wiki_template: String,

    /// Candidate names of the target sub-section, in priority order.
    pub target_node_names: Vec<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            design_system: prompt::DEFAULT_DESIGN_SYSTEM_PROMPT.to_string(),
            design_template: prompt::DEFAULT_DESIGN_HUMAN_TEMPLATE.to_string(),
            wiki_system: prompt::DEFAULT_WIKI_SYSTEM_PROMPT.to_string(),
            wiki_template: prompt::DEFAULT_WIKI_HUMAN_TEMPLATE.to_string(),
            target_node_names: vec!["活動說明頁".to_string(), "活動說明".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        let mut config = Config::default();
        config.llm.temperature = 3.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_from_config() {
        let config = ConfluenceConfig {
            username: Some("user@acme.test".to_string()),
            api_token: Some("token".to_string()),
            ..ConfluenceConfig::default()
        };
        let (username, _token) = config.credentials().unwrap();
        assert_eq!(username, "user@acme.test");
    }
}
