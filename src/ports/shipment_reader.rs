//! Shipment reader port (read side).
//!
//! Query operations over a [`QuerySpec`]. The same spec drives the count
//! query and the row query, so `total_count` always describes the full
//! matching set regardless of the page window.

use crate::domain::foundation::DomainError;
use crate::domain::shipment::{Page, PageRequest, QuerySpec, Shipment, StatusStats};
use async_trait::async_trait;

/// Reader port for shipment list views.
#[async_trait]
pub trait ShipmentReader: Send + Sync {
    /// Count all shipments matching the query.
    async fn count(&self, spec: &QuerySpec) -> Result<u64, DomainError>;

    /// Fetch one window of matching shipments, newest first.
    async fn fetch_page(
        &self,
        spec: &QuerySpec,
        request: &PageRequest,
    ) -> Result<Vec<Shipment>, DomainError>;

    /// Per-status count, average cost and total cost, largest group first.
    async fn status_stats(&self, spec: &QuerySpec) -> Result<Vec<StatusStats>, DomainError>;

    /// Count plus page, both from the same spec.
    async fn paginate(
        &self,
        spec: &QuerySpec,
        request: &PageRequest,
    ) -> Result<Page<Shipment>, DomainError> {
        let total = self.count(spec).await?;
        let items = self.fetch_page(spec, request).await?;
        Ok(Page::new(items, total, *request))
    }
}
