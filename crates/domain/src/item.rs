//! Item records exchanged with the remote listing service.
//!
//! The request and response views are kept as separate types because the
//! service spells the seller field differently in each direction
//! (`sellerID` going out, `sellerId` coming back) and only the response
//! carries server-assigned fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Engagement counters attached to an item.
///
/// Counters are signed so that a misbehaving server returning a negative
/// value still decodes and is caught by the verification layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of likes.
    pub likes: i64,
    /// Number of views.
    pub view_count: i64,
    /// Number of contact requests.
    pub contacts: i64,
}

impl Statistics {
    /// Creates a statistics snapshot.
    #[must_use]
    pub const fn new(likes: i64, view_count: i64, contacts: i64) -> Self {
        Self {
            likes,
            view_count,
            contacts,
        }
    }

    /// Returns each counter paired with its JSON field name.
    #[must_use]
    pub const fn counters(&self) -> [(&'static str, i64); 3] {
        [
            ("likes", self.likes),
            ("viewCount", self.view_count),
            ("contacts", self.contacts),
        ]
    }
}

/// Server-assigned item identifier.
///
/// Opaque to the client. Once returned by the create endpoint it is the
/// only key used for later lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps a raw identifier, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` if `raw` is empty or
    /// whitespace only.
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier(
                "identifier cannot be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Item as sent to the create endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Owner of the item.
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    /// Display name.
    pub name: String,
    /// Price in whatever minor unit the service uses.
    pub price: i64,
    /// Initial statistics snapshot.
    pub statistics: Statistics,
}

impl ItemRequest {
    /// Creates a request with zeroed statistics.
    #[must_use]
    pub fn new(seller_id: i64, name: impl Into<String>, price: i64) -> Self {
        Self {
            seller_id,
            name: name.into(),
            price,
            statistics: Statistics::default(),
        }
    }

    /// Sets the statistics snapshot (builder pattern).
    #[must_use]
    pub const fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = statistics;
        self
    }

    /// Checks the input constraints the service expects.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidItem` naming the first offending field.
    pub fn validate(&self) -> DomainResult<()> {
        if self.seller_id <= 0 {
            return Err(DomainError::invalid_item(
                "sellerID",
                format!("must be positive, got {}", self.seller_id),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_item("name", "cannot be empty"));
        }
        if self.price < 0 {
            return Err(DomainError::invalid_item(
                "price",
                format!("must be non-negative, got {}", self.price),
            ));
        }
        for (field, value) in self.statistics.counters() {
            if value < 0 {
                return Err(DomainError::invalid_item(
                    field,
                    format!("must be non-negative, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Item as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ItemResponseWire")]
pub struct ItemResponse {
    /// Server-assigned identifier.
    pub id: String,
    /// Owner of the item.
    pub seller_id: i64,
    /// Display name.
    pub name: String,
    /// Price.
    pub price: i64,
    /// Current statistics.
    pub statistics: Statistics,
    /// Creation timestamp, ISO-8601 by convention. Not validated.
    pub created_at: String,
}

/// Wire shape of `ItemResponse`. Both seller spellings may appear in the
/// same record; `sellerId` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemResponseWire {
    id: String,
    #[serde(default)]
    seller_id: Option<i64>,
    #[serde(default, rename = "sellerID")]
    seller_id_upper: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: i64,
    #[serde(default)]
    statistics: Statistics,
    #[serde(default)]
    created_at: String,
}

impl From<ItemResponseWire> for ItemResponse {
    fn from(wire: ItemResponseWire) -> Self {
        Self {
            id: wire.id,
            seller_id: wire.seller_id.or(wire.seller_id_upper).unwrap_or_default(),
            name: wire.name,
            price: wire.price,
            statistics: wire.statistics,
            created_at: wire.created_at,
        }
    }
}

impl ItemResponse {
    /// Returns the identifier as an `ItemId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` if the server sent a blank id.
    pub fn item_id(&self) -> DomainResult<ItemId> {
        ItemId::new(self.id.clone())
    }
}
