use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers match on these,
// never on the human-readable message string.

/// Stable error code constants.
///
/// UI-equivalent callers that need to branch on failure kind (retry a
/// storage failure, surface a validation message inline) should match on
/// [`ServiceError::error_code`]. Codes never change; messages may be
/// reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified error type used across the task core.
///
/// The taxonomy keeps "the id does not exist" distinguishable from "the
/// write failed": `NotFound` means zero rows matched, `Storage` means I/O
/// failure or on-disk corruption. Callers that need retry-vs-abort logic
/// depend on that distinction.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Caller-supplied fields failed shape checks. Raised at the service
    /// boundary before any store access; never persisted.
    #[error("{0}")]
    Validation(String),

    /// Operation targeted an id absent from the store.
    #[error("{0}")]
    NotFound(String),

    /// Storage backend failure: I/O error or corrupt row (including an
    /// unrecognized state code on read).
    #[error("{0}")]
    Storage(String),

    /// Unexpected internal error.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Storage(_) => error_code::STORAGE_ERROR,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    /// Whether a retry can plausibly succeed (transient storage failure)
    /// as opposed to a caller bug or a missing record.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ServiceError::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_mapping() {
        assert_eq!(ServiceError::Validation("x".into()).error_code(), "VALIDATION_FAILED");
        assert_eq!(ServiceError::NotFound("x".into()).error_code(), "NOT_FOUND");
        assert_eq!(ServiceError::Storage("x".into()).error_code(), "STORAGE_ERROR");
        assert_eq!(ServiceError::Internal("x".into()).error_code(), "INTERNAL");
    }

    #[test]
    fn error_display_is_just_message() {
        assert_eq!(ServiceError::NotFound("task 42".into()).to_string(), "task 42");
        assert_eq!(ServiceError::Validation("name empty".into()).to_string(), "name empty");
    }

    #[test]
    fn retryable_kinds() {
        assert!(ServiceError::Storage("disk full".into()).is_retryable());
        assert!(!ServiceError::NotFound("task 1".into()).is_retryable());
        assert!(!ServiceError::Validation("bad".into()).is_retryable());
    }
}
