//! Creation status messages.
//!
//! The create endpoint may answer with `{"status": "<text> - <id>"}`
//! instead of the full item. The identifier is whatever follows the
//! single `" - "` separator.

use crate::error::{DomainError, DomainResult};
use crate::item::ItemId;

/// Separator between the human-readable text and the identifier.
pub const STATUS_SEPARATOR: &str = " - ";

/// A parsed creation status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Human-readable part, e.g. "Successfully created".
    pub text: String,
    /// Identifier of the newly created item.
    pub id: ItemId,
}

impl StatusMessage {
    /// Splits a raw status string into its text and identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedStatus` unless the separator splits the
    /// string into exactly two parts with a non-empty identifier.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let parts: Vec<&str> = raw.split(STATUS_SEPARATOR).collect();
        let [text, id] = parts.as_slice() else {
            return Err(DomainError::MalformedStatus(format!(
                "expected exactly one '{STATUS_SEPARATOR}' separator in {raw:?}, found {}",
                parts.len() - 1
            )));
        };

        let id = ItemId::new(*id).map_err(|_| {
            DomainError::MalformedStatus(format!("identifier segment is empty in {raw:?}"))
        })?;

        Ok(Self {
            text: (*text).to_string(),
            id,
        })
    }
}
