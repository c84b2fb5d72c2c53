//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL persistence gateway
//! - `memory` - In-process store with the same constraints (dev/test)
//! - `tracking` - Tracking number candidate sources
//! - `http` - axum JSON API

pub mod http;
pub mod memory;
pub mod postgres;
pub mod tracking;

pub use memory::InMemoryShipmentStore;
pub use postgres::{PostgresShipmentReader, PostgresShipmentRepository};
pub use tracking::RandomTrackingNumbers;
