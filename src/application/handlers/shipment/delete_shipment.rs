//! DeleteShipmentHandler - idempotent, owner-scoped delete.

use std::sync::Arc;

use crate::domain::foundation::{ShipmentId, UserId};
use crate::domain::shipment::ShipmentError;
use crate::ports::ShipmentRepository;

/// Command to delete a shipment.
#[derive(Debug, Clone)]
pub struct DeleteShipmentCommand {
    pub shipment_id: ShipmentId,
    pub user_id: UserId,
}

/// Handler for deleting shipments.
pub struct DeleteShipmentHandler {
    repository: Arc<dyn ShipmentRepository>,
}

impl DeleteShipmentHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self { repository }
    }

    /// Returns whether a row existed. A missing row is not an error.
    pub async fn handle(&self, cmd: DeleteShipmentCommand) -> Result<bool, ShipmentError> {
        let deleted = self
            .repository
            .delete(&cmd.shipment_id, &cmd.user_id)
            .await?;

        if deleted {
            tracing::info!(user_id = %cmd.user_id, shipment_id = %cmd.shipment_id, "Shipment deleted");
        } else {
            tracing::debug!(user_id = %cmd.user_id, shipment_id = %cmd.shipment_id, "Nothing to delete");
        }

        Ok(deleted)
    }
}
