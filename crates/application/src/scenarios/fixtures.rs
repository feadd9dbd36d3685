//! Items the canonical scenarios create.
//!
//! Every scenario posts a fresh item; nothing is deleted afterwards.

use itemcheck_domain::{ItemRequest, Statistics};

/// Seller that owns every fixture item.
pub const SELLER_ID: i64 = 123_321;

/// Item for the plain creation check.
#[must_use]
pub fn create_item() -> ItemRequest {
    ItemRequest::new(SELLER_ID, "Тестовый Товар", 1000).with_statistics(Statistics::new(1, 2, 3))
}

/// Item created and then fetched by its identifier.
#[must_use]
pub fn get_by_id_item() -> ItemRequest {
    ItemRequest::new(SELLER_ID, "Тестовое объявление для GET", 2500)
        .with_statistics(Statistics::new(1, 1, 1))
}

/// Item created and then looked up among its seller's items.
#[must_use]
pub fn by_seller_item() -> ItemRequest {
    ItemRequest::new(SELLER_ID, "Тестовое объявление для sellerID", 3000)
        .with_statistics(Statistics::new(1, 1, 1))
}

/// Item created and then queried for statistics.
#[must_use]
pub fn statistics_item() -> ItemRequest {
    ItemRequest::new(SELLER_ID, "Объявление для статистики", 4000)
        .with_statistics(Statistics::new(1, 1, 1))
}
