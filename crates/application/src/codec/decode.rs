//! Response decoders for the item API endpoints.

use itemcheck_domain::{DomainError, ItemId, ItemResponse, Statistics, StatusMessage};
use serde_json::{Map, Value};
use thiserror::Error;

/// A response body that matched none of the expected shapes.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The body is not valid JSON of the expected shape.
    #[error("expected {expected}: {source}")]
    Shape {
        /// Human-readable description of the accepted shapes.
        expected: &'static str,
        /// Last decode failure.
        source: serde_json::Error,
    },

    /// A status map without a string `status` field.
    #[error("response object has no string `status` field")]
    MissingStatus,

    /// The status string or identifier is malformed.
    #[error(transparent)]
    Identifier(#[from] DomainError),
}

/// Decoded answer from the create endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateResponse {
    /// The service echoed the full item.
    Item {
        /// Validated identifier.
        id: ItemId,
        /// The canonical copy returned by the service.
        item: ItemResponse,
    },
    /// The service answered with a `"<text> - <id>"` status message.
    Status(StatusMessage),
}

impl CreateResponse {
    /// Identifier of the created item, whichever shape was returned.
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        match self {
            Self::Item { id, .. } => id,
            Self::Status(message) => &message.id,
        }
    }

    /// The echoed item, if the service returned one.
    #[must_use]
    pub const fn item(&self) -> Option<&ItemResponse> {
        match self {
            Self::Item { item, .. } => Some(item),
            Self::Status(_) => None,
        }
    }
}

/// Decoded answer from the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsPayload {
    /// The service returned a JSON array.
    Many(Vec<Statistics>),
    /// The service returned a single JSON object.
    One(Statistics),
}

impl StatisticsPayload {
    /// Flattens either shape into a sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<Statistics> {
        match self {
            Self::Many(list) => list,
            Self::One(single) => vec![single],
        }
    }
}

/// Decodes the create endpoint's response.
///
/// A full item object is tried first, then a map with a `status` string.
///
/// # Errors
///
/// Returns `FormatError` if neither shape parses, or if the identifier
/// they carry is blank or cannot be extracted.
pub fn decode_created(body: &[u8]) -> Result<CreateResponse, FormatError> {
    if let Ok(item) = serde_json::from_slice::<ItemResponse>(body) {
        let id = item.item_id()?;
        return Ok(CreateResponse::Item { id, item });
    }

    let map: Map<String, Value> =
        serde_json::from_slice(body).map_err(|source| FormatError::Shape {
            expected: "item object or status map",
            source,
        })?;
    let status = map
        .get("status")
        .and_then(Value::as_str)
        .ok_or(FormatError::MissingStatus)?;

    Ok(CreateResponse::Status(StatusMessage::parse(status)?))
}

/// Decodes a list endpoint's response. Empty arrays are valid.
///
/// # Errors
///
/// Returns `FormatError::Shape` if the body is not an array of items.
pub fn decode_items(body: &[u8]) -> Result<Vec<ItemResponse>, FormatError> {
    serde_json::from_slice(body).map_err(|source| FormatError::Shape {
        expected: "array of items",
        source,
    })
}

/// Decodes the statistics endpoint's response.
///
/// An array is tried first, then a single object.
///
/// # Errors
///
/// Returns `FormatError::Shape` if neither shape parses.
pub fn decode_statistics(body: &[u8]) -> Result<StatisticsPayload, FormatError> {
    if let Ok(list) = serde_json::from_slice::<Vec<Statistics>>(body) {
        return Ok(StatisticsPayload::Many(list));
    }

    serde_json::from_slice::<Statistics>(body)
        .map(StatisticsPayload::One)
        .map_err(|source| FormatError::Shape {
            expected: "statistics array or object",
            source,
        })
}
