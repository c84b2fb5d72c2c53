//! Shipment Tracker - user-scoped parcel records.
//!
//! This crate manages the shipment lifecycle: tracking number assignment,
//! derived shipping cost, owner-scoped CRUD, and filtered, searched and
//! aggregated queries over a single persistence gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
