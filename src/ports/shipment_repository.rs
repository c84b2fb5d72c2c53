//! Shipment repository port (write side and point lookups).
//!
//! Defines the contract for persisting and retrieving Shipment aggregates.
//! Every lookup is scoped by owner except the global tracking-number probe
//! used during generation.
//!
//! # Design
//!
//! - **Single statement per call**: each write commits on its own
//! - **Typed outcomes**: "not found" is `None` / `false`, never an error
//! - **Constraint names**: violations carry the violated constraint so the
//!   caller can tell a tracking-number collision from other integrity errors

use crate::domain::foundation::{DomainError, ShipmentId, UserId};
use crate::domain::shipment::{Shipment, TrackingNumber};
use async_trait::async_trait;

/// Name of the unique constraint on `shipments.tracking_number`.
pub const TRACKING_NUMBER_CONSTRAINT: &str = "shipments_tracking_number_key";

/// Repository port for Shipment aggregate persistence.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Insert a new shipment and return its generated key.
    ///
    /// The shipment must already carry a tracking number.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation` naming the violated constraint
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, shipment: &Shipment) -> Result<ShipmentId, DomainError>;

    /// Update a persisted shipment, scoped by `(id, user_id)`.
    ///
    /// Returns `false` if no row matched.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation` naming the violated constraint
    /// - `DatabaseError` on persistence failure
    async fn update(&self, shipment: &Shipment) -> Result<bool, DomainError>;

    /// Delete a shipment, scoped by `(id, user_id)`.
    ///
    /// Returns whether a row existed. Deleting a missing row is not an error.
    async fn delete(&self, id: &ShipmentId, user_id: &UserId) -> Result<bool, DomainError>;

    /// Find a shipment by id within one owner's collection.
    async fn find_by_id(
        &self,
        id: &ShipmentId,
        user_id: &UserId,
    ) -> Result<Option<Shipment>, DomainError>;

    /// Find a shipment by tracking number.
    ///
    /// With `user_id` the lookup is restricted to that owner; without it the
    /// search is global.
    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
        user_id: Option<&UserId>,
    ) -> Result<Option<Shipment>, DomainError>;

    /// Check whether any shipment, of any owner, uses this tracking number.
    async fn tracking_number_exists(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<bool, DomainError>;
}
