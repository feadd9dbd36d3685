//! HTTP Client port

use std::future::Future;

use itemcheck_domain::{request::RequestSpec, response::ResponseSpec};
use thiserror::Error;

/// Transport-level failures.
///
/// A non-2xx status is not an error here; it comes back as a normal
/// `ResponseSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The URL could not be used for a request.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport's default timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The response body could not be read to the end.
    #[error("failed to read response body: {0}")]
    BodyRead(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the fully drained response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or malformed response framing.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
