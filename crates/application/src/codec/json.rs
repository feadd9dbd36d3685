//! JSON encoding for request bodies.

use itemcheck_domain::ItemRequest;
use serde::Serialize;

use crate::error::ApplicationResult;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serializes a value to compact JSON bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(value)?)
}

/// Validates an item and encodes it as a create-request body.
///
/// # Errors
///
/// Returns `ApplicationError::Domain` if the item violates its input
/// constraints, or `ApplicationError::Serialization` if encoding fails.
pub fn encode_item(item: &ItemRequest) -> ApplicationResult<Vec<u8>> {
    item.validate()?;
    Ok(to_json_bytes(item)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use itemcheck_domain::{DomainError, Statistics};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_item_is_compact_json() {
        let item = ItemRequest::new(123_321, "Тестовое объявление для GET", 2500)
            .with_statistics(Statistics::new(1, 1, 1));

        let bytes = encode_item(&item).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            r#"{"sellerID":123321,"name":"Тестовое объявление для GET","price":2500,"statistics":{"likes":1,"viewCount":1,"contacts":1}}"#
        );
    }

    #[test]
    fn test_encode_item_validates_first() {
        let item = ItemRequest::new(123_321, "", 2500);
        let err = encode_item(&item).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidItem { field: "name", .. })
        ));
    }
}
