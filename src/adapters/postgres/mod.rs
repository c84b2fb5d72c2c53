//! PostgreSQL adapters - Database implementations for the shipment ports.
//!
//! - `PostgresShipmentRepository` - Writes and point lookups
//! - `PostgresShipmentReader` - Filtered, search and statistics queries
//! - `connect` / `run_migrations` - Pool bootstrap

mod errors;
mod mapping;
mod pool;
mod shipment_reader;
mod shipment_repository;
mod sql;

pub use pool::{connect, run_migrations};
pub use shipment_reader::PostgresShipmentReader;
pub use shipment_repository::PostgresShipmentRepository;
