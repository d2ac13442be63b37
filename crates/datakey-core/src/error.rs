//! Error types for key construction.

use std::fmt;

use datakey_types::TypeError;
use thiserror::Error;

/// A builder field required before a key can be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyField {
    Id,
    Name,
    Query,
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeyField::Id => "id",
            KeyField::Name => "name",
            KeyField::Query => "query",
        };
        f.write_str(s)
    }
}

/// Errors that can occur while building a [`Key`](crate::Key).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// One or more required fields were never supplied.
    #[error("incomplete key builder: missing {}", join_fields(.missing))]
    Incomplete { missing: Vec<KeyField> },

    /// The supplied id does not match the catalog id pattern.
    #[error("malformed key id: {0}")]
    InvalidId(#[from] TypeError),

    /// The supplied display name is empty or whitespace.
    #[error("key name must not be empty")]
    EmptyName,
}

fn join_fields(fields: &[KeyField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_every_missing_field() {
        let err = KeyError::Incomplete {
            missing: vec![KeyField::Id, KeyField::Query],
        };
        assert_eq!(err.to_string(), "incomplete key builder: missing id, query");
    }
}
