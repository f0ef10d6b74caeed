//! Summarization Orchestrator
//!
//! Drives a single run from raw aggregated text to a validated
//! `SummaryResult`: prepare prompt, invoke the model, parse the response as
//! a single JSON object, validate against the contract. Each stage fails
//! with its own classification and nothing is retried here; retry policy
//! belongs to the caller.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::PromptConfig;
use crate::source::SourceKind;
use crate::types::{BriefError, Result, SummaryResult};

use super::prompt;
use super::provider::LlmProvider;

/// One summarization run: prompt -> invoke -> parse -> validate.
pub struct Summarizer {
    provider: Arc<dyn LlmProvider>,
    prompts: PromptConfig,
}

impl Summarizer {
    pub fn new(provider: Arc<dyn LlmProvider>, prompts: PromptConfig) -> Self {
        Self { provider, prompts }
    }

    /// Produce a validated structured result for the aggregated content.
    ///
    /// Errors are classified: transport problems and non-JSON output surface
    /// as `Invocation`, contract violations as `Validation`.
    pub async fn summarize(
        &self,
        url: &str,
        content: &str,
        kind: SourceKind,
    ) -> Result<SummaryResult> {
        let messages = prompt::build_messages(&self.prompts, kind, url, content);
        debug!(source = %kind, model = self.provider.model(), "prepared prompt");

        let raw = self.provider.complete(&messages).await?;

        let value = parse_response(&raw)?;
        let result = crate::ai::schema::validate(&value).map_err(BriefError::Validation)?;

        info!(
            source = %kind,
            summary_items = result.summary.len(),
            qa_items = result.qa.len(),
            "summary validated"
        );
        Ok(result)
    }
}

/// Parse the model's raw response as a single JSON object.
///
/// Markdown code fences are stripped first; anything that still fails to
/// parse is an invocation failure, classified distinctly from contract
/// validation.
pub fn parse_response(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fences(raw.trim());

    serde_json::from_str::<Value>(cleaned).map_err(|e| {
        BriefError::invocation(format!(
            "model returned non-JSON output ({}). Content preview: {}",
            e,
            cleaned.chars().take(200).collect::<String>()
        ))
    })
}

/// Strip a surrounding ```json ... ``` or ``` ... ``` fence, if present.
fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim().strip_suffix("```").unwrap_or(body).trim()
}
