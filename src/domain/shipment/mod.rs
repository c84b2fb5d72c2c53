//! Shipment module - the parcel aggregate and its value objects.
//!
//! # Module Structure
//!
//! - `aggregate` - Shipment entity and its client-supplied details
//! - `status` / `priority` - Closed enumerations
//! - `tracking` - Tracking number format
//! - `pricing` - Shipping cost formula
//! - `query` - Filters, search, pagination and stats shapes
//! - `errors` - Shipment-specific errors

mod aggregate;
mod errors;
mod pricing;
mod priority;
mod query;
mod status;
mod tracking;

pub use aggregate::{
    Shipment, ShipmentDetails, MAX_ADDRESS_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    MAX_WEIGHT_KG,
};
pub use errors::ShipmentError;
pub use pricing::{
    calculate_shipping_cost, quote, round_to_cents, BASE_COST, COST_PER_KG, EXPRESS_MULTIPLIER,
};
pub use priority::Priority;
pub use query::{
    Page, PageRequest, Predicate, QuerySpec, ShipmentFilter, StatusStats, SEARCH_COLUMNS,
};
pub use status::ShipmentStatus;
pub use tracking::{TrackingNumber, TRACKING_DIGITS, TRACKING_NUMBER_LEN, TRACKING_PREFIX};
