//! ShipmentSaver - persists a shipment with tracking-number collision retry.
//!
//! Every write path (create, update, toggle express) funnels through
//! [`ShipmentSaver::save`], which guarantees that:
//!
//! 1. A shipment without a tracking number gets one that was free at
//!    generation time.
//! 2. The shipping cost is recomputed from the current fields.
//! 3. A unique violation on the tracking number alone triggers a fresh
//!    number and another attempt. Any other failure is returned as is.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::shipment::{Shipment, ShipmentError, TrackingNumber};
use crate::ports::{ShipmentRepository, TrackingNumberSource, TRACKING_NUMBER_CONSTRAINT};

/// Draws candidates until one is not in use by any shipment.
///
/// Retries without bound; the candidate space is large enough that a
/// long run of collisions does not happen in practice.
pub async fn generate_unique_tracking_number(
    source: &dyn TrackingNumberSource,
    repository: &dyn ShipmentRepository,
) -> Result<TrackingNumber, DomainError> {
    let mut attempt: u32 = 1;
    loop {
        let candidate = source.next_candidate();
        if !repository.tracking_number_exists(&candidate).await? {
            return Ok(candidate);
        }
        tracing::warn!(
            tracking_number = %candidate,
            attempt,
            "Generated tracking number already in use, retrying"
        );
        attempt += 1;
    }
}

/// Saves shipments through the repository.
#[derive(Clone)]
pub struct ShipmentSaver {
    repository: Arc<dyn ShipmentRepository>,
    tracking_numbers: Arc<dyn TrackingNumberSource>,
}

impl ShipmentSaver {
    pub fn new(
        repository: Arc<dyn ShipmentRepository>,
        tracking_numbers: Arc<dyn TrackingNumberSource>,
    ) -> Self {
        Self {
            repository,
            tracking_numbers,
        }
    }

    /// Generate a tracking number not currently in use.
    pub async fn generate_tracking_number(&self) -> Result<TrackingNumber, DomainError> {
        generate_unique_tracking_number(self.tracking_numbers.as_ref(), self.repository.as_ref())
            .await
    }

    /// Insert or update the shipment.
    ///
    /// On success an inserted shipment carries its new id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if an update matched no row for this owner
    /// - `ConstraintViolation` for any constraint other than the tracking number
    /// - `Storage` on persistence failure
    pub async fn save(&self, shipment: &mut Shipment) -> Result<(), ShipmentError> {
        if shipment.tracking_number().is_none() {
            let tracking_number = self.generate_tracking_number().await?;
            shipment.assign_tracking_number(tracking_number);
        }
        shipment.reprice();

        let mut attempt: u32 = 1;
        loop {
            match self.write(shipment).await {
                Ok(()) => return Ok(()),
                Err(ShipmentError::ConstraintViolation { constraint, .. })
                    if constraint == TRACKING_NUMBER_CONSTRAINT =>
                {
                    tracing::warn!(
                        tracking_number = ?shipment.tracking_number().map(|t| t.as_str()),
                        attempt,
                        "Tracking number taken at save time, regenerating"
                    );
                    let tracking_number = self.generate_tracking_number().await?;
                    shipment.assign_tracking_number(tracking_number);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn write(&self, shipment: &mut Shipment) -> Result<(), ShipmentError> {
        match shipment.id() {
            Some(id) => {
                if self.repository.update(shipment).await? {
                    Ok(())
                } else {
                    Err(ShipmentError::not_found(id))
                }
            }
            None => {
                let id = self.repository.insert(shipment).await?;
                shipment.mark_persisted(id);
                Ok(())
            }
        }
    }
}
