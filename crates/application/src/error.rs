//! Application error types

use itemcheck_domain::DomainError;
use thiserror::Error;

use crate::codec::{FormatError, SerializationError};
use crate::ports::HttpClientError;

/// Application-level errors.
///
/// Everything except `Assertion` aborts the scenario it occurs in.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A fixture or identifier failed domain validation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The request body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The HTTP call failed.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// The response matched none of the shapes expected for its endpoint.
    #[error("format error in {endpoint} response: {source}; body: {body}")]
    Format {
        /// Endpoint that produced the response.
        endpoint: &'static str,
        /// Why decoding failed.
        source: FormatError,
        /// Preview of the raw body.
        body: String,
    },

    /// A decoded value violated an expected invariant.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// A scenario step ran out of order.
    #[error("invalid scenario state: {0}")]
    InvalidState(DomainError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
