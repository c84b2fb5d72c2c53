//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the shipment domain.

mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError, CONSTRAINT_DETAIL};
pub use ids::{ShipmentId, UserId};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;
