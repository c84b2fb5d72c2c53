//! PostgreSQL implementation of ShipmentReader.
//!
//! Every query renders the same [`QuerySpec`] through
//! [`render_where`](super::sql::render_where), so counts, pages and stats
//! agree on the matching set.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::errors::{corrupt_row, map_sqlx_error};
use super::mapping::{row_to_shipment, SHIPMENT_COLUMNS};
use super::sql::render_where;
use crate::domain::foundation::DomainError;
use crate::domain::shipment::{PageRequest, QuerySpec, Shipment, ShipmentStatus, StatusStats};
use crate::ports::ShipmentReader;

/// PostgreSQL implementation of ShipmentReader.
#[derive(Clone)]
pub struct PostgresShipmentReader {
    pool: PgPool,
}

impl PostgresShipmentReader {
    /// Creates a new PostgresShipmentReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipmentReader for PostgresShipmentReader {
    async fn count(&self, spec: &QuerySpec) -> Result<u64, DomainError> {
        let clause = render_where(spec);
        let sql = format!("SELECT COUNT(*) AS total FROM shipments WHERE {}", clause.sql);

        let row = clause
            .bind(sqlx::query(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count shipments", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| map_sqlx_error("read shipment count", e))?;

        Ok(total.max(0) as u64)
    }

    async fn fetch_page(
        &self,
        spec: &QuerySpec,
        request: &PageRequest,
    ) -> Result<Vec<Shipment>, DomainError> {
        let clause = render_where(spec);
        let limit = clause.next_placeholder();
        let sql = format!(
            "SELECT {} FROM shipments WHERE {} \
             ORDER BY created_at DESC, id DESC LIMIT ${} OFFSET ${}",
            SHIPMENT_COLUMNS,
            clause.sql,
            limit,
            limit + 1
        );

        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let rows = clause
            .bind(sqlx::query(&sql))
            .bind(i64::from(request.per_page()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list shipments", e))?;

        rows.into_iter().map(row_to_shipment).collect()
    }

    async fn status_stats(&self, spec: &QuerySpec) -> Result<Vec<StatusStats>, DomainError> {
        let clause = render_where(spec);
        let sql = format!(
            r#"
            SELECT status,
                   COUNT(*) AS count,
                   ROUND(AVG(shipping_cost)::numeric, 2)::float8 AS avg_cost,
                   ROUND(SUM(shipping_cost)::numeric, 2)::float8 AS total_cost
            FROM shipments
            WHERE {}
            GROUP BY status
            ORDER BY count DESC, status ASC
            "#,
            clause.sql
        );

        let rows = clause
            .bind(sqlx::query(&sql))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("compute status stats", e))?;

        rows.into_iter().map(row_to_status_stats).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_status_stats(row: sqlx::postgres::PgRow) -> Result<StatusStats, DomainError> {
    let status: String = row.try_get("status").map_err(|e| corrupt_row("status", e))?;
    let count: i64 = row.try_get("count").map_err(|e| corrupt_row("count", e))?;
    let avg_cost: f64 = row
        .try_get("avg_cost")
        .map_err(|e| corrupt_row("avg_cost", e))?;
    let total_cost: f64 = row
        .try_get("total_cost")
        .map_err(|e| corrupt_row("total_cost", e))?;

    Ok(StatusStats {
        status: status
            .parse::<ShipmentStatus>()
            .map_err(|e| corrupt_row("status", e))?,
        count: count.max(0) as u64,
        avg_cost,
        total_cost,
    })
}
