//! Response specification type
//!
//! Raw outcome of one HTTP call: status, headers, fully drained body and
//! elapsed time. Decoding into typed records happens in the application
//! layer.

use std::collections::HashMap;
use std::time::Duration;

/// Default cap for body previews in log lines and error messages.
pub const BODY_PREVIEW_LIMIT: usize = 512;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns the canonical reason phrase for the codes this API uses.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            409 => "Conflict",
            422 => "Unprocessable Entity",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// HTTP response specification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers as a map.
    pub headers: HashMap<String, String>,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Time from send to fully drained body.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a lossy UTF-8 string.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns at most `limit` characters of the body, marking truncation.
    #[must_use]
    pub fn body_preview(&self, limit: usize) -> String {
        preview(&self.body_text(), limit)
    }
}

/// Truncates `text` on a character boundary.
#[must_use]
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_categories() {
        assert!(StatusCode::new(200).is_success());
        assert!(StatusCode::new(201).is_success());
        assert!(!StatusCode::new(301).is_success());
        assert!(!StatusCode::new(404).is_success());
    }

    #[test]
    fn test_status_code_display() {
        assert_eq!(StatusCode::new(200).to_string(), "200 OK");
        assert_eq!(StatusCode::new(404).to_string(), "404 Not Found");
        assert_eq!(StatusCode::new(599).to_string(), "599 Unknown");
    }

    #[test]
    fn test_body_preview_truncates_on_char_boundary() {
        let response = ResponseSpec::new(
            200,
            HashMap::new(),
            "Объявление".as_bytes().to_vec(),
            Duration::ZERO,
        );
        assert_eq!(response.body_preview(3), "Объ...");
        assert_eq!(response.body_preview(100), "Объявление");
    }

    #[test]
    fn test_status_checks() {
        let ok = ResponseSpec {
            status: StatusCode(201),
            ..Default::default()
        };
        assert!(ok.is_success());

        let missing = ResponseSpec {
            status: StatusCode(404),
            ..Default::default()
        };
        assert!(!missing.is_success());
    }
}
