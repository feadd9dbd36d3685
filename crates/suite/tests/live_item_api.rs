//! Live scenarios against the deployed item API.
//!
//! Ignored by default; run with `cargo test -p itemcheck-suite -- --ignored`.
//! `ITEMCHECK_BASE_URL` points them at another deployment.

#![allow(clippy::unwrap_used)]

use itemcheck_suite::{
    create_and_fetch_by_id, create_and_fetch_statistics, create_and_list_by_seller, create_item,
    fixtures, live_api,
};

#[tokio::test]
#[ignore = "requires network access to the item API"]
async fn live_create_item() {
    let api = live_api().unwrap();
    create_item(&api, &fixtures::create_item())
        .await
        .into_result()
        .unwrap();
}

#[tokio::test]
#[ignore = "requires network access to the item API"]
async fn live_create_and_fetch_by_id() {
    let api = live_api().unwrap();
    create_and_fetch_by_id(&api, &fixtures::get_by_id_item())
        .await
        .into_result()
        .unwrap();
}

#[tokio::test]
#[ignore = "requires network access to the item API"]
async fn live_create_and_list_by_seller() {
    let api = live_api().unwrap();
    create_and_list_by_seller(&api, &fixtures::by_seller_item())
        .await
        .into_result()
        .unwrap();
}

#[tokio::test]
#[ignore = "requires network access to the item API"]
async fn live_create_and_fetch_statistics() {
    let api = live_api().unwrap();
    create_and_fetch_statistics(&api, &fixtures::statistics_item())
        .await
        .into_result()
        .unwrap();
}
