//! Language Model Layer
//!
//! - [`provider`]: the `LlmProvider` trait seam and the OpenAI implementation.
//! - [`prompt`]: system/human template pairs and format instructions.
//! - [`schema`]: pure validation of the structured-output contract.
//! - [`orchestrator`]: the prompt -> invoke -> parse -> validate state machine.

pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod schema;

pub use orchestrator::Summarizer;
pub use provider::{LlmProvider, OpenAiProvider, PromptMessages};
