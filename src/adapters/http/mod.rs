//! HTTP adapters - REST API implementations.
//!
//! `api_router` assembles the full surface:
//! - `/api/shipments` - shipment lifecycle, lists, search and stats
//! - `/api/pricing/quote` - stateless cost preview
//! - `/health` - liveness probe

pub mod middleware;
pub mod shipment;

use axum::{routing::get, Json, Router};

pub use shipment::{pricing_routes, shipment_routes, ShipmentAppState};

/// Builds the application router over the given handler state.
pub fn api_router(state: ShipmentAppState) -> Router {
    Router::new()
        .nest("/api/shipments", shipment_routes(state))
        .nest("/api/pricing", pricing_routes())
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
