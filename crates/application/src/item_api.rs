//! Item API use case
//!
//! One method per remote endpoint: build the request, send it through the
//! `HttpClient` port, decode the body. Status codes are logged, never
//! turned into errors here.

use std::sync::Arc;

use itemcheck_domain::request::RequestSpec;
use itemcheck_domain::response::{BODY_PREVIEW_LIMIT, ResponseSpec};
use itemcheck_domain::{ItemId, ItemRequest, ItemResponse};
use tracing::{debug, info, warn};

use crate::codec::{
    self, CreateResponse, FormatError, StatisticsPayload, decode_created, decode_items,
    decode_statistics,
};
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::HttpClient;
use crate::routes::ItemRoutes;

/// A decoded value together with the raw response it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    /// Raw response, kept for status checks and diagnostics.
    pub response: ResponseSpec,
    /// Decoded body.
    pub value: T,
}

/// Client for the item API.
///
/// # Example
///
/// ```ignore
/// let api = ItemApi::new(Arc::new(ReqwestHttpClient::new()?), ItemRoutes::parse(base)?);
/// let created = api.create_item(&item).await?;
/// let items = api.get_item(created.value.id()).await?;
/// ```
pub struct ItemApi<C: HttpClient> {
    client: Arc<C>,
    routes: ItemRoutes,
}

impl<C: HttpClient> ItemApi<C> {
    /// Creates a new `ItemApi` with the given HTTP client and routes.
    pub const fn new(client: Arc<C>, routes: ItemRoutes) -> Self {
        Self { client, routes }
    }

    /// Routes this client sends to.
    pub const fn routes(&self) -> &ItemRoutes {
        &self.routes
    }

    /// `POST /api/1/item`
    ///
    /// # Errors
    ///
    /// Fails if the item is invalid or cannot be encoded, on transport
    /// failure, or if the response carries no usable identifier.
    pub async fn create_item(&self, item: &ItemRequest) -> ApplicationResult<Reply<CreateResponse>> {
        let body = codec::encode_item(item)?;
        let request = RequestSpec::post_json(self.routes.create(), body);
        let response = self.send(&request).await?;
        Self::decode("create item", response, decode_created)
    }

    /// `GET /api/1/item/{id}`
    ///
    /// # Errors
    ///
    /// Fails on transport failure or if the body is not an array of items.
    pub async fn get_item(&self, id: &ItemId) -> ApplicationResult<Reply<Vec<ItemResponse>>> {
        let request = RequestSpec::get(self.routes.item(id));
        let response = self.send(&request).await?;
        Self::decode("get item", response, decode_items)
    }

    /// `GET /api/1/{sellerID}/item`
    ///
    /// # Errors
    ///
    /// Fails on transport failure or if the body is not an array of items.
    pub async fn get_items_by_seller(
        &self,
        seller_id: i64,
    ) -> ApplicationResult<Reply<Vec<ItemResponse>>> {
        let request = RequestSpec::get(self.routes.seller_items(seller_id));
        let response = self.send(&request).await?;
        Self::decode("get items by seller", response, decode_items)
    }

    /// `GET /api/1/item/{id}/statistic`
    ///
    /// # Errors
    ///
    /// Fails on transport failure or if the body is neither a statistics
    /// array nor a single statistics object.
    pub async fn get_statistics(&self, id: &ItemId) -> ApplicationResult<Reply<StatisticsPayload>> {
        let request = RequestSpec::get(self.routes.statistics(id));
        let response = self.send(&request).await?;
        Self::decode("get statistics", response, decode_statistics)
    }

    async fn send(&self, request: &RequestSpec) -> ApplicationResult<ResponseSpec> {
        info!(request = %request.label(), "sending request");

        let response = self.client.execute(request).await.map_err(|e| {
            warn!(request = %request.label(), error = %e, "transport failure");
            ApplicationError::Transport(e)
        })?;

        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = response.duration.as_millis() as u64;
        if response.is_success() {
            info!(request = %request.label(), status = %response.status, elapsed_ms, "response received");
        } else {
            warn!(request = %request.label(), status = %response.status, elapsed_ms, "non-success status");
        }
        debug!(body = %response.body_text(), "response body");

        Ok(response)
    }

    fn decode<T>(
        endpoint: &'static str,
        response: ResponseSpec,
        decoder: impl FnOnce(&[u8]) -> Result<T, FormatError>,
    ) -> ApplicationResult<Reply<T>> {
        match decoder(&response.body) {
            Ok(value) => Ok(Reply { response, value }),
            Err(source) => Err(ApplicationError::Format {
                endpoint,
                source,
                body: response.body_preview(BODY_PREVIEW_LIMIT),
            }),
        }
    }
}
