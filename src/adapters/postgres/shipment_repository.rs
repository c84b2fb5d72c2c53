//! PostgreSQL implementation of ShipmentRepository.
//!
//! Each method issues exactly one statement on a pooled connection; the
//! connection returns to the pool when the future completes, on every path.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::errors::map_sqlx_error;
use super::mapping::{row_to_shipment, SHIPMENT_COLUMNS};
use crate::domain::foundation::{DomainError, ErrorCode, ShipmentId, UserId};
use crate::domain::shipment::{Shipment, TrackingNumber};
use crate::ports::ShipmentRepository;

/// PostgreSQL implementation of ShipmentRepository.
#[derive(Clone)]
pub struct PostgresShipmentRepository {
    pool: PgPool,
}

impl PostgresShipmentRepository {
    /// Creates a new PostgresShipmentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipmentRepository for PostgresShipmentRepository {
    async fn insert(&self, shipment: &Shipment) -> Result<ShipmentId, DomainError> {
        let tracking_number = shipment.tracking_number().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                "Cannot insert shipment without tracking number",
            )
        })?;

        let row = sqlx::query(
            r#"
            INSERT INTO shipments (
                tracking_number, user_id, sender_name, sender_address,
                recipient_name, recipient_address, package_description, weight,
                status, priority, is_express, shipping_cost, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id
            "#,
        )
        .bind(tracking_number.as_str())
        .bind(shipment.user_id().as_i64())
        .bind(shipment.sender_name())
        .bind(shipment.sender_address())
        .bind(shipment.recipient_name())
        .bind(shipment.recipient_address())
        .bind(shipment.package_description())
        .bind(shipment.weight())
        .bind(shipment.status().as_str())
        .bind(shipment.priority().as_str())
        .bind(shipment.is_express())
        .bind(shipment.shipping_cost())
        .bind(*shipment.created_at().as_datetime())
        .bind(*shipment.updated_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert shipment", e))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| map_sqlx_error("read inserted shipment id", e))?;

        Ok(ShipmentId::new(id))
    }

    async fn update(&self, shipment: &Shipment) -> Result<bool, DomainError> {
        let id = shipment.id().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Cannot update unsaved shipment")
        })?;

        let result = sqlx::query(
            r#"
            UPDATE shipments SET
                tracking_number = $3,
                sender_name = $4,
                sender_address = $5,
                recipient_name = $6,
                recipient_address = $7,
                package_description = $8,
                weight = $9,
                status = $10,
                priority = $11,
                is_express = $12,
                shipping_cost = $13,
                updated_at = $14
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(shipment.user_id().as_i64())
        .bind(shipment.tracking_number().map(|t| t.as_str()))
        .bind(shipment.sender_name())
        .bind(shipment.sender_address())
        .bind(shipment.recipient_name())
        .bind(shipment.recipient_address())
        .bind(shipment.package_description())
        .bind(shipment.weight())
        .bind(shipment.status().as_str())
        .bind(shipment.priority().as_str())
        .bind(shipment.is_express())
        .bind(shipment.shipping_cost())
        .bind(*shipment.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update shipment", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &ShipmentId, user_id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM shipments WHERE id = $1 AND user_id = $2")
            .bind(id.as_i64())
            .bind(user_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete shipment", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(
        &self,
        id: &ShipmentId,
        user_id: &UserId,
    ) -> Result<Option<Shipment>, DomainError> {
        let sql = format!(
            "SELECT {} FROM shipments WHERE id = $1 AND user_id = $2",
            SHIPMENT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .bind(user_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("fetch shipment", e))?;

        row.map(row_to_shipment).transpose()
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
        user_id: Option<&UserId>,
    ) -> Result<Option<Shipment>, DomainError> {
        let sql = format!(
            "SELECT {} FROM shipments \
             WHERE tracking_number = $1 AND ($2::BIGINT IS NULL OR user_id = $2)",
            SHIPMENT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tracking_number.as_str())
            .bind(user_id.map(|u| u.as_i64()))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("fetch shipment by tracking number", e))?;

        row.map(row_to_shipment).transpose()
    }

    async fn tracking_number_exists(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM shipments WHERE tracking_number = $1)",
        )
        .bind(tracking_number.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("check tracking number", e))?;

        Ok(result.0)
    }
}
