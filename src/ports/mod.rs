//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ShipmentRepository` - Writes and owner-scoped point lookups
//! - `ShipmentReader` - Filtered lists, search and statistics
//! - `TrackingNumberSource` - Candidate tracking number generator

mod shipment_reader;
mod shipment_repository;
mod tracking_number_source;

pub use shipment_reader::ShipmentReader;
pub use shipment_repository::{ShipmentRepository, TRACKING_NUMBER_CONSTRAINT};
pub use tracking_number_source::TrackingNumberSource;
