//! SearchShipmentsHandler - free-text search over a user's shipments.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::shipment::{Page, QuerySpec, Shipment, ShipmentError};
use crate::ports::ShipmentReader;

use super::PageSizePolicy;

/// Query to search a user's shipments.
#[derive(Debug, Clone)]
pub struct SearchShipmentsQuery {
    pub user_id: UserId,
    /// Substring matched against tracking number, names and description.
    pub term: String,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Handler for free-text search.
pub struct SearchShipmentsHandler {
    reader: Arc<dyn ShipmentReader>,
    policy: PageSizePolicy,
}

impl SearchShipmentsHandler {
    pub fn new(reader: Arc<dyn ShipmentReader>, policy: PageSizePolicy) -> Self {
        Self { reader, policy }
    }

    pub async fn handle(&self, query: SearchShipmentsQuery) -> Result<Page<Shipment>, ShipmentError> {
        let spec = QuerySpec::search(query.user_id, query.term.trim());
        let request = self.policy.resolve(query.page, query.per_page);

        let page = self.reader.paginate(&spec, &request).await?;

        tracing::debug!(
            user_id = %query.user_id,
            term = %query.term,
            total_count = page.total_count,
            "Searched shipments"
        );

        Ok(page)
    }
}
