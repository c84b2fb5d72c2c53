//! HTTP adapter for shipment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DeleteShipmentResponse, ErrorResponse, ListShipmentsParams, QuoteParams, QuoteResponse,
    ShipmentListResponse, ShipmentRequest, ShipmentResponse, StatusStatsResponse,
};
pub use handlers::ShipmentAppState;
pub use routes::{pricing_routes, shipment_routes};
