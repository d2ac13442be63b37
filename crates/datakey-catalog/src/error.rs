//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A key with this id is already registered. Key ids are declared once.
    #[error("duplicate key id: {id}")]
    DuplicateKey { id: String },

    /// The key's namespace is not in the configured allow-list.
    #[error("namespace {namespace:?} is not allowed for key {id}")]
    NamespaceNotAllowed { id: String, namespace: String },

    /// The catalog was sealed and accepts no further registrations.
    #[error("catalog is sealed, cannot register {id}")]
    Sealed { id: String },

    /// The catalog already holds its configured maximum number of keys.
    #[error("catalog capacity exceeded: at most {max} keys")]
    CapacityExceeded { max: usize },

    /// A key exists under this id but is bound to another value type.
    #[error("key {id} is bound to {actual}, not {expected}")]
    TypeMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An internal lock was poisoned by a panicking thread.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),

    /// The catalog configuration is invalid or could not be parsed.
    #[error("invalid catalog config: {0}")]
    Config(String),

    /// I/O error while reading a configuration file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
