//! UpdateShipmentHandler - full-field update of an owned shipment.

use std::sync::Arc;

use crate::domain::foundation::{ShipmentId, UserId};
use crate::domain::shipment::{Shipment, ShipmentDetails, ShipmentError};
use crate::ports::ShipmentRepository;

use super::ShipmentSaver;

/// Command to replace every client-supplied field of a shipment.
#[derive(Debug, Clone)]
pub struct UpdateShipmentCommand {
    pub shipment_id: ShipmentId,
    pub user_id: UserId,
    pub details: ShipmentDetails,
}

/// Handler for updating shipments.
pub struct UpdateShipmentHandler {
    repository: Arc<dyn ShipmentRepository>,
    saver: ShipmentSaver,
}

impl UpdateShipmentHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>, saver: ShipmentSaver) -> Self {
        Self { repository, saver }
    }

    pub async fn handle(&self, cmd: UpdateShipmentCommand) -> Result<Shipment, ShipmentError> {
        let mut shipment = self
            .repository
            .find_by_id(&cmd.shipment_id, &cmd.user_id)
            .await?
            .ok_or(ShipmentError::NotFound(cmd.shipment_id))?;

        shipment.apply_details(cmd.details)?;
        self.saver.save(&mut shipment).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            shipment_id = %cmd.shipment_id,
            status = %shipment.status(),
            "Shipment updated"
        );

        Ok(shipment)
    }
}
