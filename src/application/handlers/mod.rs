//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod shipment;

pub use shipment::{
    // Commands
    CreateShipmentCommand, CreateShipmentHandler,
    DeleteShipmentCommand, DeleteShipmentHandler,
    ToggleExpressCommand, ToggleExpressHandler,
    UpdateShipmentCommand, UpdateShipmentHandler,
    // Queries
    FindByTrackingNumberHandler, FindByTrackingNumberQuery,
    GetShipmentHandler, GetShipmentQuery,
    GetStatusStatsHandler, GetStatusStatsQuery,
    ListShipmentsHandler, ListShipmentsQuery,
    SearchShipmentsHandler, SearchShipmentsQuery,
    // Persistence
    generate_unique_tracking_number, PageSizePolicy, ShipmentSaver,
};
