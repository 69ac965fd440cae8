//! Link error types

use thiserror::Error;

/// Link error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// A constructor argument was outside its allowed set of values
    #[error("Invalid {argument}: {value:?}")]
    InvalidArgument {
        /// Name of the rejected argument
        argument: &'static str,
        /// The rejected value
        value: String,
    },

    /// A metadata value could not be read as a link sequence
    #[error("Metadata key {key:?} holds {found}, expected {expected}")]
    TypeMismatch {
        /// Metadata key being read
        key: String,
        /// What the key should hold
        expected: &'static str,
        /// Description of what it actually holds
        found: String,
    },
}

/// Specialized Result type for link operations
pub type LinkResult<T> = Result<T, LinkError>;

impl LinkError {
    /// Create an error for a direction string that is not `in`, `out` or `bidir`
    pub fn invalid_direction(value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: "direction",
            value: value.into(),
        }
    }

    /// Create an error for a metadata value that is not a link sequence
    pub fn type_mismatch(key: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected: "a sequence of links",
            found: found.into(),
        }
    }
}
