//! Core domain types: content tree nodes, the validated summarization
//! result, and the unified error taxonomy.

pub mod error;
pub mod node;
pub mod summary;

pub use error::{BriefError, Result, SchemaViolation};
pub use node::{ContentNode, TEXT_NODE_TYPE};
pub use summary::{QAItem, SummaryResult, extract_questions};
