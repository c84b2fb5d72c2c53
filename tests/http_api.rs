//! HTTP surface tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shipment_tracker::adapters::http::{api_router, ShipmentAppState};
use shipment_tracker::adapters::memory::InMemoryShipmentStore;
use shipment_tracker::adapters::tracking::RandomTrackingNumbers;
use shipment_tracker::application::PageSizePolicy;

fn app() -> Router {
    let store = Arc::new(InMemoryShipmentStore::new());
    api_router(ShipmentAppState::new(
        store.clone(),
        store,
        Arc::new(RandomTrackingNumbers::new()),
        PageSizePolicy::default(),
    ))
}

fn request(method: &str, uri: &str, user: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn shipment_body(sender: &str) -> Value {
    json!({
        "sender_name": sender,
        "sender_address": "123 Main St, New York, NY 10001",
        "recipient_name": "Jane Smith",
        "recipient_address": "456 Oak Ave, Los Angeles, CA 90210",
        "package_description": "Electronics - Laptop",
        "weight": 2.5,
        "priority": "urgent",
        "is_express": true
    })
}

async fn create(app: &Router, user: &str, sender: &str) -> Value {
    let (status, body) = send(
        app,
        request("POST", "/api/shipments", Some(user), Some(shipment_body(sender))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn health_is_public() {
    let (status, body) = send(&app(), request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn missing_identity_is_unauthorized() {
    let (status, _) = send(&app(), request("GET", "/api/shipments", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app(), request("GET", "/api/shipments", Some("nobody"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let app = app();
    let created = create(&app, "1", "John Doe").await;

    assert_eq!(created["shipping_cost"], 36.0);
    assert_eq!(created["status"], "pending");
    let tracking = created["tracking_number"].as_str().unwrap();
    assert!(tracking.starts_with("SHP"));

    let uri = format!("/api/shipments/{}", created["id"]);
    let (status, body) = send(&app, request("GET", &uri, Some("1"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tracking_number"], tracking);

    let (status, _) = send(&app, request("GET", &uri, Some("2"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_is_bad_request() {
    let mut body = shipment_body("John Doe");
    body["sender_name"] = json!("   ");
    let (status, error) = send(
        &app(),
        request("POST", "/api/shipments", Some("1"), Some(body)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["field"], "sender_name");

    let mut body = shipment_body("John Doe");
    body["status"] = json!("lost");
    let (status, error) = send(
        &app(),
        request("POST", "/api/shipments", Some("1"), Some(body)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["field"], "status");
}

#[tokio::test]
async fn list_paginates_and_search_overrides_filters() {
    let app = app();
    for i in 0..5 {
        create(&app, "1", &format!("Sender {}", i)).await;
    }

    let (status, page) = send(
        &app,
        request("GET", "/api/shipments?page=3&per_page=2", Some("1"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total_count"], 5);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["has_next"], false);

    // No delivered shipments exist, but the search term takes precedence.
    let (status, found) = send(
        &app,
        request("GET", "/api/shipments?status=delivered&q=Sender%203", Some("1"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["total_count"], 1);
    assert_eq!(found["search"], "Sender 3");

    let (status, filtered) = send(
        &app,
        request("GET", "/api/shipments?status=delivered", Some("1"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["total_count"], 0);
    assert_eq!(filtered["total_pages"], 1);

    let (status, _) = send(
        &app,
        request("GET", "/api/shipments?priority=asap", Some("1"), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_toggle_and_delete() {
    let app = app();
    let created = create(&app, "1", "John Doe").await;
    let uri = format!("/api/shipments/{}", created["id"]);

    let mut changed = shipment_body("John Doe");
    changed["weight"] = json!(10.0);
    changed["priority"] = json!("standard");
    changed["is_express"] = json!(false);
    changed["status"] = json!("in_transit");
    let (status, updated) = send(&app, request("PUT", &uri, Some("1"), Some(changed))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["shipping_cost"], 25.0);
    assert_eq!(updated["status"], "in_transit");
    assert_eq!(updated["tracking_number"], created["tracking_number"]);

    let toggle_uri = format!("{}/toggle-express", uri);
    let (status, toggled) = send(&app, request("POST", &toggle_uri, Some("1"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["is_express"], true);
    assert_eq!(toggled["shipping_cost"], 45.0);

    let (status, body) = send(&app, request("DELETE", &uri, Some("2"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);

    let (status, body) = send(&app, request("DELETE", &uri, Some("1"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = send(&app, request("GET", &uri, Some("1"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn track_is_case_insensitive_and_scoped() {
    let app = app();
    let created = create(&app, "1", "John Doe").await;
    let tracking = created["tracking_number"].as_str().unwrap().to_lowercase();
    let uri = format!("/api/shipments/track/{}", tracking);

    let (status, found) = send(&app, request("GET", &uri, Some("1"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], created["id"]);

    let (status, _) = send(&app, request("GET", &uri, Some("2"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_group_by_status() {
    let app = app();
    create(&app, "1", "John Doe").await;
    create(&app, "1", "Jane Roe").await;

    let (status, body) = send(&app, request("GET", "/api/shipments/stats", Some("1"), None)).await;
    assert_eq!(status, StatusCode::OK);
    let stats = body["stats"].as_array().unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["status"], "pending");
    assert_eq!(stats[0]["count"], 2);
    assert_eq!(stats[0]["avg_cost"], 36.0);
    assert_eq!(stats[0]["total_cost"], 72.0);
}

#[tokio::test]
async fn pricing_quote_is_lenient() {
    let app = app();

    let (status, body) = send(
        &app,
        request("GET", "/api/pricing/quote?weight=2&priority=priority&express=true", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // (5 + 4) * 1.5 * 1.8
    assert_eq!(body["shipping_cost"], 24.3);

    let (_, body) = send(
        &app,
        request("GET", "/api/pricing/quote?weight=heavy&priority=urgent", None, None),
    )
    .await;
    assert_eq!(body["shipping_cost"], 5.0);

    let (status, body) = send(
        &app,
        request("GET", "/api/pricing/quote?weight=-10&priority=standard", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shipping_cost"], 5.0);
}
