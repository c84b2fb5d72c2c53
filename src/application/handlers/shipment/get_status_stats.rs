//! GetStatusStatsHandler - per-status totals for one user.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::shipment::{QuerySpec, ShipmentError, StatusStats};
use crate::ports::ShipmentReader;

/// Query for a user's status breakdown.
#[derive(Debug, Clone)]
pub struct GetStatusStatsQuery {
    pub user_id: UserId,
}

/// Handler for status statistics.
pub struct GetStatusStatsHandler {
    reader: Arc<dyn ShipmentReader>,
}

impl GetStatusStatsHandler {
    pub fn new(reader: Arc<dyn ShipmentReader>) -> Self {
        Self { reader }
    }

    /// Groups ordered by count descending, then status name.
    pub async fn handle(&self, query: GetStatusStatsQuery) -> Result<Vec<StatusStats>, ShipmentError> {
        let spec = QuerySpec::for_owner(query.user_id);
        Ok(self.reader.status_stats(&spec).await?)
    }
}
