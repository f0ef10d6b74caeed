//! BriefWiki - Design-Doc and Wiki Page Summarizer
//!
//! Extracts textual content from a Figma design document or a Confluence
//! page, summarizes it with a language model under a strict structured-output
//! contract, and optionally republishes the validated brief as a new
//! Confluence page.
//!
//! ## Pipeline
//!
//! 1. Classify the source URL ([`source`]) and fetch the raw document.
//! 2. Flatten it into sectioned plain text ([`extract`]), optionally scoped
//!    to a named target section.
//! 3. Run the summarizer ([`ai`]): prompt, invoke, parse, validate.
//! 4. Render the validated result as plain text ([`types::SummaryResult`])
//!    and/or publish it ([`publish`]).
//!
//! ## Modules
//!
//! - [`ai`]: LLM provider seam, prompt templates, contract validation,
//!   orchestration
//! - [`extract`]: tree and markup text aggregation
//! - [`source`]: Figma and Confluence clients with aggregation policies
//! - [`publish`]: ADF conversion and page creation
//! - [`config`]: layered configuration loading

pub mod ai;
pub mod cli;
pub mod config;
pub mod extract;
pub mod publish;
pub mod source;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use types::{BriefError, Result, SchemaViolation};

pub use ai::{LlmProvider, OpenAiProvider, Summarizer};
pub use publish::Publisher;
pub use source::SourceKind;
pub use types::{ContentNode, QAItem, SummaryResult};
