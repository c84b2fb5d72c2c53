//! HTTP routes for shipment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_shipment, delete_shipment, get_shipment, list_shipments, pricing_quote,
    shipment_stats, toggle_express, track_shipment, update_shipment, ShipmentAppState,
};

/// Creates the shipment router, to be nested under `/api/shipments`.
pub fn shipment_routes(state: ShipmentAppState) -> Router {
    Router::new()
        .route("/", post(create_shipment).get(list_shipments))
        .route("/stats", get(shipment_stats))
        .route("/track/:tracking", get(track_shipment))
        .route(
            "/:id",
            get(get_shipment).put(update_shipment).delete(delete_shipment),
        )
        .route("/:id/toggle-express", post(toggle_express))
        .with_state(state)
}

/// Creates the pricing router, to be nested under `/api/pricing`.
pub fn pricing_routes() -> Router {
    Router::new().route("/quote", get(pricing_quote))
}
