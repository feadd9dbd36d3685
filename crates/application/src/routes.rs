//! URL construction for the item API endpoints.

use itemcheck_domain::{DomainError, DomainResult, ItemId};
use url::Url;

/// Builds absolute endpoint URLs from a base URL.
///
/// Path parameters are appended as percent-encoded segments, so an
/// identifier can never escape its segment. A path prefix on the base URL
/// is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRoutes {
    base: Url,
}

impl ItemRoutes {
    /// Path segments shared by every endpoint.
    pub const API_PREFIX: [&'static str; 2] = ["api", "1"];

    /// Creates routes rooted at `base`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` unless `base` is an `http` or
    /// `https` URL that can carry a path.
    pub fn new(mut base: Url) -> DomainResult<Self> {
        if !matches!(base.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme '{}' in {base}",
                base.scheme()
            )));
        }
        if base.cannot_be_a_base() {
            return Err(DomainError::InvalidUrl(format!("{base} cannot be a base URL")));
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// Parses `base` and creates routes rooted at it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if `base` does not parse or is not
    /// usable as a base.
    pub fn parse(base: &str) -> DomainResult<Self> {
        let url = Url::parse(base).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base}")))?;
        Self::new(url)
    }

    /// The base URL all endpoints hang off.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// `POST /api/1/item`
    #[must_use]
    pub fn create(&self) -> Url {
        self.endpoint(&["item"])
    }

    /// `GET /api/1/item/{id}`
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Url {
        self.endpoint(&["item", id.as_str()])
    }

    /// `GET /api/1/{sellerID}/item`
    #[must_use]
    pub fn seller_items(&self, seller_id: i64) -> Url {
        self.endpoint(&[&seller_id.to_string(), "item"])
    }

    /// `GET /api/1/item/{id}/statistic`
    #[must_use]
    pub fn statistics(&self, id: &ItemId) -> Url {
        self.endpoint(&["item", id.as_str(), "statistic"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in `new`, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(Self::API_PREFIX)
                .extend(segments);
        }
        url
    }
}
