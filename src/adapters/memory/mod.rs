//! In-memory storage adapters.

mod shipment_store;

pub use shipment_store::InMemoryShipmentStore;
