//! Source of candidate tracking numbers.
//!
//! Candidates are not guaranteed unique; callers must check them against
//! storage before use.

use crate::domain::shipment::TrackingNumber;

/// Produces tracking number candidates.
pub trait TrackingNumberSource: Send + Sync {
    /// Next candidate. Never fails.
    fn next_candidate(&self) -> TrackingNumber;
}
