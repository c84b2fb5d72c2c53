//! ListShipmentsHandler - filtered, paginated list of a user's shipments.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::shipment::{Page, PageRequest, QuerySpec, Shipment, ShipmentError, ShipmentFilter};
use crate::ports::ShipmentReader;

/// Page size rules shared by list and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizePolicy {
    /// Used when the caller gives no page size (or zero).
    pub default_per_page: u32,
    /// Larger requests are clamped to this.
    pub max_per_page: u32,
}

impl PageSizePolicy {
    pub const DEFAULT_PER_PAGE: u32 = 4;
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn new(default_per_page: u32, max_per_page: u32) -> Self {
        Self {
            default_per_page,
            max_per_page,
        }
    }

    /// Builds the page window for a request.
    pub fn resolve(&self, page: Option<u32>, per_page: Option<u32>) -> PageRequest {
        let per_page = match per_page {
            None | Some(0) => self.default_per_page,
            Some(n) => n.min(self.max_per_page),
        };
        PageRequest::new(page.unwrap_or(1), per_page)
    }
}

impl Default for PageSizePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PER_PAGE, Self::MAX_PER_PAGE)
    }
}

/// Query to list a user's shipments.
#[derive(Debug, Clone)]
pub struct ListShipmentsQuery {
    pub user_id: UserId,
    pub filter: ShipmentFilter,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Handler for filtered lists.
pub struct ListShipmentsHandler {
    reader: Arc<dyn ShipmentReader>,
    policy: PageSizePolicy,
}

impl ListShipmentsHandler {
    pub fn new(reader: Arc<dyn ShipmentReader>, policy: PageSizePolicy) -> Self {
        Self { reader, policy }
    }

    pub async fn handle(&self, query: ListShipmentsQuery) -> Result<Page<Shipment>, ShipmentError> {
        let spec = QuerySpec::filtered(query.user_id, &query.filter);
        let request = self.policy.resolve(query.page, query.per_page);

        let page = self.reader.paginate(&spec, &request).await?;

        tracing::debug!(
            user_id = %query.user_id,
            page = page.page,
            total_count = page.total_count,
            "Listed shipments"
        );

        Ok(page)
    }
}
