//! Unified Error Type System
//!
//! Centralized error types for the whole pipeline. The variants mirror the
//! stages a request moves through: resolving the source URL, fetching the
//! document, invoking the model, validating its output, and publishing.
//!
//! Folder-lookup failures during publication are deliberately absent from
//! this taxonomy: the publisher degrades to a top-level page instead of
//! propagating (see `publish`).

use thiserror::Error;

// =============================================================================
// Schema Violation
// =============================================================================

/// A broken rule in the structured-output contract.
///
/// Carries the offending field and a human-readable description of the rule,
/// so callers can report exactly what the model got wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Field that failed validation (`title`, `plan`, `summary`, `qa`).
    pub field: &'static str,
    /// Description of the rule that was broken.
    pub message: String,
}

impl SchemaViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.field, self.message)
    }
}

impl std::error::Error for SchemaViolation {}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum BriefError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Pipeline Errors
    // -------------------------------------------------------------------------
    /// The URL does not map to a recognizable source document.
    #[error("Unresolvable source URL: {0}")]
    SourceUnresolvable(String),

    /// The source provider rejected the fetch (transport, auth, status).
    #[error("Fetch from {service} failed: {message}")]
    Fetch {
        service: &'static str,
        message: String,
    },

    /// Model call failed in transport, or returned a non-JSON response.
    #[error("Model invocation failed: {0}")]
    Invocation(String),

    /// Parsed model output violates the structured-output contract.
    #[error("Model output rejected: {0}")]
    Validation(SchemaViolation),

    /// The publication target rejected page creation.
    #[error("Page creation failed: {0}")]
    Publish(String),
}

impl From<SchemaViolation> for BriefError {
    fn from(violation: SchemaViolation) -> Self {
        BriefError::Validation(violation)
    }
}

impl BriefError {
    /// Create a fetch error for a named source service.
    pub fn fetch(service: &'static str, message: impl Into<String>) -> Self {
        Self::Fetch {
            service,
            message: message.into(),
        }
    }

    /// Create a model invocation error.
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::Invocation(message.into())
    }

    /// Create a publication error.
    pub fn publish(message: impl Into<String>) -> Self {
        Self::Publish(message.into())
    }
}

pub type Result<T> = std::result::Result<T, BriefError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_violation_display() {
        let violation = SchemaViolation::new("summary", "expected 5 to 30 items, got 2");
        assert_eq!(
            violation.to_string(),
            "invalid `summary`: expected 5 to 30 items, got 2"
        );
    }

    #[test]
    fn test_validation_error_wraps_violation() {
        let err: BriefError = SchemaViolation::new("title", "must not be blank").into();
        assert!(matches!(err, BriefError::Validation(_)));
        assert!(err.to_string().contains("invalid `title`"));
    }

    #[test]
    fn test_fetch_error_names_service() {
        let err = BriefError::fetch("figma", "status 403");
        assert_eq!(err.to_string(), "Fetch from figma failed: status 403");
    }
}
