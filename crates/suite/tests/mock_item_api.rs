//! Offline contract tests: every scenario against a wiremock stand-in.

#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use common::{ITEM_ID, SELLER_ID, created_status, item_record, mount_create, mount_get, setup};
use itemcheck_application::ApplicationError;
use itemcheck_domain::ScenarioState;
use itemcheck_suite::{
    create_and_fetch_by_id, create_and_fetch_statistics, create_and_list_by_seller, create_item,
    fixtures,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_log::test;

#[test(tokio::test)]
async fn fetch_by_id_round_trips_identifier() {
    let (server, api) = setup().await;
    mount_create(
        &server,
        json!({
            "sellerID": 123_321,
            "name": "Тестовое объявление для GET",
            "price": 2500,
            "statistics": { "likes": 1, "viewCount": 1, "contacts": 1 }
        }),
        created_status(ITEM_ID),
    )
    .await;
    mount_get(
        &server,
        &format!("/api/1/item/{ITEM_ID}"),
        200,
        json!([item_record(ITEM_ID, "Тестовое объявление для GET", 2500)]),
    )
    .await;

    let report = create_and_fetch_by_id(&api, &fixtures::get_by_id_item()).await;

    assert_eq!(report.state, ScenarioState::Verified);
    let results = report.into_result().unwrap();
    assert_eq!(results.failed, 0);
}

#[test(tokio::test)]
async fn create_accepts_full_item_response() {
    let (server, api) = setup().await;
    let sent = fixtures::create_item();
    let mut echoed = item_record(ITEM_ID, &sent.name, sent.price);
    echoed["statistics"] = json!({ "likes": 1, "viewCount": 2, "contacts": 3 });
    mount_create(
        &server,
        json!({
            "sellerID": SELLER_ID,
            "name": "Тестовый Товар",
            "price": 1000,
            "statistics": { "likes": 1, "viewCount": 2, "contacts": 3 }
        }),
        echoed,
    )
    .await;

    let report = create_item(&api, &sent).await;

    assert!(report.passed(), "{report}");
}

#[test(tokio::test)]
async fn list_by_seller_finds_created_item() {
    let (server, api) = setup().await;
    let sent = fixtures::by_seller_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(
        &server,
        "/api/1/123321/item",
        200,
        json!([
            item_record("older-item", "Другое объявление", 10),
            item_record(ITEM_ID, "Тестовое объявление для sellerID", 3000)
        ]),
    )
    .await;

    let report = create_and_list_by_seller(&api, &sent).await;

    assert!(report.passed(), "{report}");
}

#[test(tokio::test)]
async fn list_by_seller_reports_missing_item_without_aborting() {
    let (server, api) = setup().await;
    let sent = fixtures::by_seller_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(
        &server,
        "/api/1/123321/item",
        200,
        json!([item_record("older-item", "Другое объявление", 10)]),
    )
    .await;

    let report = create_and_list_by_seller(&api, &sent).await;

    assert_eq!(report.state, ScenarioState::Verified);
    assert!(report.error.is_none());
    assert_eq!(report.results.failed, 1);
    assert!(!report.passed());
}

#[test(tokio::test)]
async fn list_by_seller_flags_price_mismatch() {
    let (server, api) = setup().await;
    let sent = fixtures::by_seller_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(
        &server,
        "/api/1/123321/item",
        200,
        json!([item_record(ITEM_ID, "Тестовое объявление для sellerID", 2999)]),
    )
    .await;

    let report = create_and_list_by_seller(&api, &sent).await;

    let failures: Vec<String> = report
        .results
        .failures()
        .map(|r| r.assertion.description())
        .collect();
    assert_eq!(failures, vec!["listed item.price equals 3000".to_string()]);
}

#[test(tokio::test)]
async fn statistics_accepts_array_shape() {
    let (server, api) = setup().await;
    let sent = fixtures::statistics_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(
        &server,
        &format!("/api/1/item/{ITEM_ID}/statistic"),
        200,
        json!([{ "likes": 1, "viewCount": 1, "contacts": 1 }]),
    )
    .await;

    let report = create_and_fetch_statistics(&api, &sent).await;

    assert!(report.passed(), "{report}");
}

#[test(tokio::test)]
async fn statistics_accepts_object_shape() {
    let (server, api) = setup().await;
    let sent = fixtures::statistics_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(
        &server,
        &format!("/api/1/item/{ITEM_ID}/statistic"),
        200,
        json!({ "likes": 0, "viewCount": 7, "contacts": 2 }),
    )
    .await;

    let report = create_and_fetch_statistics(&api, &sent).await;

    assert!(report.passed(), "{report}");
}

#[test(tokio::test)]
async fn non_success_status_is_logged_not_failed() {
    let (server, api) = setup().await;
    let sent = fixtures::get_by_id_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(
        &server,
        &format!("/api/1/item/{ITEM_ID}"),
        500,
        json!([item_record(ITEM_ID, &sent.name, sent.price)]),
    )
    .await;

    let report = create_and_fetch_by_id(&api, &sent).await;

    assert!(report.passed(), "{report}");
}

#[test(tokio::test)]
async fn error_body_is_a_format_error() {
    let (server, api) = setup().await;
    let sent = fixtures::get_by_id_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(
        &server,
        &format!("/api/1/item/{ITEM_ID}"),
        404,
        json!({ "result": { "message": "item not found" }, "status": "404" }),
    )
    .await;

    let report = create_and_fetch_by_id(&api, &sent).await;

    assert!(report.state.is_failed());
    match report.error {
        Some(ApplicationError::Format { endpoint, body, .. }) => {
            assert_eq!(endpoint, "get item");
            assert!(body.contains("item not found"));
        }
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test(tokio::test)]
async fn empty_fetch_result_aborts_scenario() {
    let (server, api) = setup().await;
    let sent = fixtures::get_by_id_item();
    mount_create(&server, serde_json::to_value(&sent).unwrap(), created_status(ITEM_ID)).await;
    mount_get(&server, &format!("/api/1/item/{ITEM_ID}"), 404, json!([])).await;

    let report = create_and_fetch_by_id(&api, &sent).await;

    assert!(report.state.is_failed());
    assert!(matches!(report.error, Some(ApplicationError::Assertion(_))));
}

#[test(tokio::test)]
async fn malformed_status_message_stops_before_follow_up() {
    let (server, api) = setup().await;
    let sent = fixtures::statistics_item();
    mount_create(
        &server,
        serde_json::to_value(&sent).unwrap(),
        json!({ "status": "Сохранили объявление" }),
    )
    .await;

    let report = create_and_fetch_statistics(&api, &sent).await;

    assert!(matches!(report.error, Some(ApplicationError::Format { .. })));
    // No GET mock is mounted; an unexpected request would make wiremock
    // answer 404 and the scenario would fail on a different error.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
