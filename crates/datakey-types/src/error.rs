use thiserror::Error;

/// Errors produced while validating identifiers and queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid catalog id {id:?}: {reason}")]
    InvalidId { id: String, reason: String },

    #[error("invalid namespace {namespace:?}: {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("invalid data query: {0}")]
    InvalidQuery(String),
}

/// Convenience type alias for type operations.
pub type Result<T> = std::result::Result<T, TypeError>;
