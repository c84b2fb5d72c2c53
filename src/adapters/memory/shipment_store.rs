//! In-Memory Shipment Store
//!
//! Implements both shipment ports over a map guarded by one lock.
//! Enforces the tracking-number unique constraint and evaluates
//! [`QuerySpec`]s with the same semantics as the PostgreSQL adapter.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OwnedByUser, ShipmentId, UserId};
use crate::domain::shipment::{
    round_to_cents, PageRequest, QuerySpec, Shipment, ShipmentStatus, StatusStats, TrackingNumber,
};
use crate::ports::{ShipmentReader, ShipmentRepository, TRACKING_NUMBER_CONSTRAINT};

#[derive(Debug, Default)]
struct StoreState {
    rows: BTreeMap<ShipmentId, Shipment>,
    last_id: i64,
}

impl StoreState {
    fn tracking_number_taken(&self, tracking_number: &TrackingNumber, except: Option<ShipmentId>) -> bool {
        self.rows.iter().any(|(id, s)| {
            Some(*id) != except && s.tracking_number() == Some(tracking_number)
        })
    }

    /// Matching rows, newest first; ties broken by id descending.
    fn matching(&self, spec: &QuerySpec) -> Vec<&Shipment> {
        let mut rows: Vec<&Shipment> = self.rows.values().filter(|s| spec.matches(s)).collect();
        rows.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        rows
    }
}

/// In-memory shipment storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipmentStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryShipmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored shipments across all owners.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

fn duplicate_tracking_number(tracking_number: &TrackingNumber) -> DomainError {
    DomainError::constraint_violation(
        TRACKING_NUMBER_CONSTRAINT,
        format!("Tracking number {} already exists", tracking_number),
    )
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentStore {
    async fn insert(&self, shipment: &Shipment) -> Result<ShipmentId, DomainError> {
        let tracking_number = shipment.tracking_number().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Cannot insert shipment without tracking number")
        })?;

        let mut state = self.state.write().await;
        if state.tracking_number_taken(tracking_number, None) {
            return Err(duplicate_tracking_number(tracking_number));
        }

        state.last_id += 1;
        let id = ShipmentId::new(state.last_id);
        let mut row = shipment.clone();
        row.mark_persisted(id);
        state.rows.insert(id, row);
        Ok(id)
    }

    async fn update(&self, shipment: &Shipment) -> Result<bool, DomainError> {
        let id = shipment.id().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Cannot update unsaved shipment")
        })?;

        let mut state = self.state.write().await;
        let owned = state
            .rows
            .get(&id)
            .map(|row| row.is_owner(shipment.user_id()))
            .unwrap_or(false);
        if !owned {
            return Ok(false);
        }
        if let Some(tracking_number) = shipment.tracking_number() {
            if state.tracking_number_taken(tracking_number, Some(id)) {
                return Err(duplicate_tracking_number(tracking_number));
            }
        }

        state.rows.insert(id, shipment.clone());
        Ok(true)
    }

    async fn delete(&self, id: &ShipmentId, user_id: &UserId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let owned = state
            .rows
            .get(id)
            .map(|row| row.is_owner(user_id))
            .unwrap_or(false);
        if owned {
            state.rows.remove(id);
        }
        Ok(owned)
    }

    async fn find_by_id(
        &self,
        id: &ShipmentId,
        user_id: &UserId,
    ) -> Result<Option<Shipment>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .get(id)
            .filter(|row| row.is_owner(user_id))
            .cloned())
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
        user_id: Option<&UserId>,
    ) -> Result<Option<Shipment>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .values()
            .find(|row| {
                row.tracking_number() == Some(tracking_number)
                    && user_id.map_or(true, |owner| row.is_owner(owner))
            })
            .cloned())
    }

    async fn tracking_number_exists(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<bool, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .tracking_number_taken(tracking_number, None))
    }
}

#[async_trait]
impl ShipmentReader for InMemoryShipmentStore {
    async fn count(&self, spec: &QuerySpec) -> Result<u64, DomainError> {
        Ok(self.state.read().await.matching(spec).len() as u64)
    }

    async fn fetch_page(
        &self,
        spec: &QuerySpec,
        request: &PageRequest,
    ) -> Result<Vec<Shipment>, DomainError> {
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let state = self.state.read().await;
        Ok(state
            .matching(spec)
            .into_iter()
            .skip(offset)
            .take(request.per_page() as usize)
            .cloned()
            .collect())
    }

    async fn status_stats(&self, spec: &QuerySpec) -> Result<Vec<StatusStats>, DomainError> {
        let state = self.state.read().await;

        let mut groups: HashMap<ShipmentStatus, (u64, f64)> = HashMap::new();
        for shipment in state.matching(spec) {
            let entry = groups.entry(shipment.status()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += shipment.shipping_cost();
        }

        let mut stats: Vec<StatusStats> = groups
            .into_iter()
            .map(|(status, (count, total))| StatusStats {
                status,
                count,
                avg_cost: round_to_cents(total / count as f64),
                total_cost: round_to_cents(total),
            })
            .collect();
        stats.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.status.as_str().cmp(b.status.as_str()))
        });
        Ok(stats)
    }
}
