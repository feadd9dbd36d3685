//! Request specification type

use url::Url;

use super::{ACCEPT, CONTENT_TYPE, Headers, HttpMethod, JSON_MEDIA_TYPE, RequestBody};

/// Complete specification for one HTTP call against the item API.
///
/// Constructors always set `Accept: application/json`; requests with a
/// body also get `Content-Type: application/json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: Url,
    /// HTTP headers
    pub headers: Headers,
    /// Request body
    pub body: RequestBody,
}

impl RequestSpec {
    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: Url) -> Self {
        let mut headers = Headers::new();
        headers.set(ACCEPT, JSON_MEDIA_TYPE);
        Self {
            method: HttpMethod::Get,
            url,
            headers,
            body: RequestBody::None,
        }
    }

    /// Creates a POST request carrying an encoded JSON body.
    #[must_use]
    pub fn post_json(url: Url, body: Vec<u8>) -> Self {
        let mut headers = Headers::new();
        headers.set(ACCEPT, JSON_MEDIA_TYPE);
        headers.set(CONTENT_TYPE, JSON_MEDIA_TYPE);
        Self {
            method: HttpMethod::Post,
            url,
            headers,
            body: RequestBody::json(body),
        }
    }

    /// Short `METHOD url` label for log lines.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.method, self.url.path())
    }
}
