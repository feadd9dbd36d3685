//! HTTP Request body types

use super::header::JSON_MEDIA_TYPE;

/// HTTP request body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// Encoded JSON document
    Json {
        /// The encoded bytes
        bytes: Vec<u8>,
    },
}

impl RequestBody {
    /// Creates a JSON body from already-encoded bytes.
    #[must_use]
    pub const fn json(bytes: Vec<u8>) -> Self {
        Self::Json { bytes }
    }

    /// Returns the content type implied by this body, if any.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Json { .. } => Some(JSON_MEDIA_TYPE),
        }
    }

    /// Returns the body bytes, empty for `None`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::None => &[],
            Self::Json { bytes } => bytes.as_slice(),
        }
    }

    /// Returns true if there is no body to send.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
