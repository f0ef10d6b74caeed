//! Summarize Command
//!
//! The full pipeline for one request: classify the URL, fetch and aggregate
//! the source document, run the summarizer, print the rendered brief, and
//! optionally publish it. Publication failure never discards the computed
//! summary; the rendered text is already on stdout and only the page URL is
//! omitted.

use std::sync::Arc;

use tracing::{info, warn};

use crate::ai::{OpenAiProvider, Summarizer};
use crate::config::Config;
use crate::extract;
use crate::publish::Publisher;
use crate::source::{self, ConfluenceClient, FigmaClient, SourceKind, confluence, figma};
use crate::types::{BriefError, Result, SummaryResult};

/// Options for one summarization run.
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    pub url: String,
    /// Publish the brief to Confluence after summarizing.
    pub publish: bool,
    /// Skip target-section scoping and always aggregate the full document.
    pub full_document: bool,
    /// Model identifier override.
    pub model: Option<String>,
    /// Decoding temperature override.
    pub temperature: Option<f32>,
}

pub async fn run(config: &Config, options: &SummarizeOptions) -> Result<()> {
    let kind = source::classify(&options.url)?;
    info!(url = %options.url, source = %kind, "starting summarization");

    let content = match kind {
        SourceKind::Design => design_content(config, options).await?,
        SourceKind::Wiki => wiki_content(config, options).await?,
    };

    let mut llm = config.llm.clone();
    if let Some(model) = &options.model {
        llm.model = model.clone();
    }
    if let Some(temperature) = options.temperature {
        llm.temperature = temperature;
    }

    let provider = Arc::new(OpenAiProvider::new(&llm)?);
    let summarizer = Summarizer::new(provider, config.prompts.clone());
    let result = summarizer.summarize(&options.url, &content, kind).await?;

    println!("{}", result.render_text());

    if options.publish {
        match try_publish(config, &result, &options.url).await {
            Ok(page_url) => println!("Published: {}", page_url),
            Err(e) => {
                // The summary above is kept; only the page URL is lost.
                warn!(error = %e, "publication failed");
                eprintln!("Publication failed: {}", e);
            }
        }
    }

    Ok(())
}

/// Fetch a Figma file and aggregate its content.
///
/// Unless scoping is disabled, the configured target-section names are tried
/// first; a matched but text-less section yields a sentinel instead of
/// silently widening back to the whole document. No match falls back to
/// full-document aggregation explicitly.
async fn design_content(config: &Config, options: &SummarizeOptions) -> Result<String> {
    let file_key = figma::extract_file_key(&options.url)
        .ok_or_else(|| BriefError::SourceUnresolvable(options.url.clone()))?;

    let client = FigmaClient::new(&config.figma)?;
    let file = client.fetch_file(file_key).await?;

    if !options.full_document {
        let names = &config.prompts.target_node_names;
        if let Some(target) = extract::find_node_by_names(&file.document, names) {
            info!(section = %target.name, "target section found, scoping extraction");
            let mut fragments = Vec::new();
            extract::collapse_text_nodes(target, &mut fragments);
            if fragments.is_empty() {
                return Ok(extract::EMPTY_TARGET.to_string());
            }
            return Ok(fragments.join("\n"));
        }
        info!("target section not found, using full document");
    }

    Ok(figma::aggregate_file(&file))
}

/// Fetch a Confluence page and aggregate its content.
async fn wiki_content(config: &Config, options: &SummarizeOptions) -> Result<String> {
    let page_id = confluence::extract_page_id(&options.url)
        .ok_or_else(|| BriefError::SourceUnresolvable(options.url.clone()))?;

    let client = ConfluenceClient::new(&config.confluence)?;
    let page = client.fetch_page(page_id).await?;
    Ok(confluence::aggregate_page(&page))
}

async fn try_publish(config: &Config, result: &SummaryResult, url: &str) -> Result<String> {
    let publisher = Publisher::new(&config.confluence)?;
    publisher.publish(result, url).await
}
