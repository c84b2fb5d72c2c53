//! GetShipmentHandler - Query handler for a single owned shipment.

use std::sync::Arc;

use crate::domain::foundation::{ShipmentId, UserId};
use crate::domain::shipment::{Shipment, ShipmentError};
use crate::ports::ShipmentRepository;

/// Query to get a shipment by id.
#[derive(Debug, Clone)]
pub struct GetShipmentQuery {
    pub shipment_id: ShipmentId,
    pub user_id: UserId,
}

/// Handler for retrieving shipments.
pub struct GetShipmentHandler {
    repository: Arc<dyn ShipmentRepository>,
}

impl GetShipmentHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetShipmentQuery) -> Result<Shipment, ShipmentError> {
        self.repository
            .find_by_id(&query.shipment_id, &query.user_id)
            .await?
            .ok_or(ShipmentError::NotFound(query.shipment_id))
    }
}
