//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `shipment` - Shipment aggregate, pricing and query specifications

pub mod foundation;
pub mod shipment;
