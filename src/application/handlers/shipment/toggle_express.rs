//! ToggleExpressHandler - flips express service and reprices.

use std::sync::Arc;

use crate::domain::foundation::{ShipmentId, UserId};
use crate::domain::shipment::{Shipment, ShipmentError};
use crate::ports::ShipmentRepository;

use super::ShipmentSaver;

/// Command to flip the express flag of a shipment.
#[derive(Debug, Clone)]
pub struct ToggleExpressCommand {
    pub shipment_id: ShipmentId,
    pub user_id: UserId,
}

/// Handler for toggling express service.
pub struct ToggleExpressHandler {
    repository: Arc<dyn ShipmentRepository>,
    saver: ShipmentSaver,
}

impl ToggleExpressHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>, saver: ShipmentSaver) -> Self {
        Self { repository, saver }
    }

    pub async fn handle(&self, cmd: ToggleExpressCommand) -> Result<Shipment, ShipmentError> {
        let mut shipment = self
            .repository
            .find_by_id(&cmd.shipment_id, &cmd.user_id)
            .await?
            .ok_or(ShipmentError::NotFound(cmd.shipment_id))?;

        let is_express = shipment.toggle_express();
        self.saver.save(&mut shipment).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            shipment_id = %cmd.shipment_id,
            is_express,
            "Express service toggled"
        );

        Ok(shipment)
    }
}
