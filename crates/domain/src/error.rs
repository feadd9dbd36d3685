//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item field violates its input constraint.
    #[error("invalid item field `{field}`: {reason}")]
    InvalidItem {
        /// JSON name of the offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A creation status message does not have the `<text> - <id>` shape.
    #[error("malformed status message: {0}")]
    MalformedStatus(String),

    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A scenario was moved to a state that cannot follow its current one.
    #[error("illegal scenario transition from {from} to {to}")]
    IllegalTransition {
        /// Current state.
        from: &'static str,
        /// Requested state.
        to: &'static str,
    },
}

impl DomainError {
    /// Creates an `InvalidItem` error.
    pub fn invalid_item(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidItem {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
