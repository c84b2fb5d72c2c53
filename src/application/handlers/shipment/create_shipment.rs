//! CreateShipmentHandler - Command handler for creating shipments.

use crate::domain::foundation::UserId;
use crate::domain::shipment::{Shipment, ShipmentDetails, ShipmentError};

use super::ShipmentSaver;

/// Command to create a new shipment.
#[derive(Debug, Clone)]
pub struct CreateShipmentCommand {
    pub user_id: UserId,
    pub details: ShipmentDetails,
}

/// Handler for creating shipments.
pub struct CreateShipmentHandler {
    saver: ShipmentSaver,
}

impl CreateShipmentHandler {
    pub fn new(saver: ShipmentSaver) -> Self {
        Self { saver }
    }

    pub async fn handle(&self, cmd: CreateShipmentCommand) -> Result<Shipment, ShipmentError> {
        // 1. Validate and build the aggregate
        let mut shipment = Shipment::new(cmd.user_id, cmd.details)?;

        // 2. Persist (assigns tracking number and id)
        self.saver.save(&mut shipment).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            shipment_id = ?shipment.id().map(|id| id.as_i64()),
            tracking_number = ?shipment.tracking_number().map(|t| t.as_str()),
            "Shipment created"
        );

        Ok(shipment)
    }
}
