//! Shared helpers for the mock contract tests.

#![allow(dead_code, clippy::unwrap_used)]

use itemcheck_infrastructure::ClientConfig;
use itemcheck_suite::{SuiteApi, api_for};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ITEM_ID: &str = "0b3c5b5e-7a4f-4d55-9a41-2a3f0c1d9e77";
pub const SELLER_ID: i64 = 123_321;

/// Starts a mock server and an API client pointed at it.
pub async fn setup() -> (MockServer, SuiteApi) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(&server.uri(), "itemcheck-suite-test").unwrap();
    let api = api_for(&config).unwrap();
    (server, api)
}

/// Body the service sends back when it only acknowledges creation.
pub fn created_status(id: &str) -> Value {
    json!({ "status": format!("Сохранили объявление - {id}") })
}

/// An item record as the service returns it.
pub fn item_record(id: &str, name: &str, price: i64) -> Value {
    json!({
        "id": id,
        "sellerId": SELLER_ID,
        "name": name,
        "price": price,
        "statistics": { "likes": 1, "viewCount": 1, "contacts": 1 },
        "createdAt": "2025-02-01 10:00:00.000000 +0300 +0300"
    })
}

/// Expects exactly one create call carrying `expected_body`.
pub async fn mount_create(server: &MockServer, expected_body: Value, response: Value) {
    Mock::given(method("POST"))
        .and(path("/api/1/item"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

/// Serves `body` with `status` for a GET on `route`.
pub async fn mount_get(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}
