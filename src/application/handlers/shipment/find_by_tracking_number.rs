//! FindByTrackingNumberHandler - case-insensitive tracking number lookup.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::shipment::{Shipment, ShipmentError, TrackingNumber};
use crate::ports::ShipmentRepository;

/// Query to look up a shipment by its tracking number.
#[derive(Debug, Clone)]
pub struct FindByTrackingNumberQuery {
    /// Raw user input; upper-cased and trimmed before comparison.
    pub tracking_number: String,
    /// Restricts the lookup to one owner. `None` searches every owner.
    pub user_id: Option<UserId>,
}

/// Handler for tracking number lookups.
pub struct FindByTrackingNumberHandler {
    repository: Arc<dyn ShipmentRepository>,
}

impl FindByTrackingNumberHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: FindByTrackingNumberQuery) -> Result<Shipment, ShipmentError> {
        // Input that cannot be a tracking number cannot match one either.
        let Ok(tracking_number) = TrackingNumber::parse_lenient(&query.tracking_number) else {
            return Err(ShipmentError::tracking_number_not_found(query.tracking_number));
        };

        tracing::debug!(tracking_number = %tracking_number, "Looking up shipment");

        self.repository
            .find_by_tracking_number(&tracking_number, query.user_id.as_ref())
            .await?
            .ok_or_else(|| ShipmentError::tracking_number_not_found(tracking_number.as_str()))
    }
}
