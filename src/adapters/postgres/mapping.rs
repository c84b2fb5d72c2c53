//! Row to aggregate mapping for the `shipments` table.

use sqlx::postgres::PgRow;
use sqlx::Row;

use super::errors::corrupt_row;
use crate::domain::foundation::{DomainError, ShipmentId, Timestamp, UserId};
use crate::domain::shipment::{Priority, Shipment, ShipmentStatus, TrackingNumber};

/// Column list selected wherever a full shipment is read.
pub(crate) const SHIPMENT_COLUMNS: &str = "id, tracking_number, user_id, \
    sender_name, sender_address, recipient_name, recipient_address, \
    package_description, weight, status, priority, is_express, shipping_cost, \
    created_at, updated_at";

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| corrupt_row(name, e))
}

pub(crate) fn row_to_shipment(row: PgRow) -> Result<Shipment, DomainError> {
    let id: i64 = column(&row, "id")?;
    let user_id: i64 = column(&row, "user_id")?;
    let tracking_number: String = column(&row, "tracking_number")?;
    let status: String = column(&row, "status")?;
    let priority: String = column(&row, "priority")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Shipment::reconstitute(
        ShipmentId::new(id),
        tracking_number
            .parse::<TrackingNumber>()
            .map_err(|e| corrupt_row("tracking_number", e))?,
        UserId::new(user_id).map_err(|e| corrupt_row("user_id", e))?,
        column(&row, "sender_name")?,
        column(&row, "sender_address")?,
        column(&row, "recipient_name")?,
        column(&row, "recipient_address")?,
        column(&row, "package_description")?,
        column(&row, "weight")?,
        status
            .parse::<ShipmentStatus>()
            .map_err(|e| corrupt_row("status", e))?,
        priority
            .parse::<Priority>()
            .map_err(|e| corrupt_row("priority", e))?,
        column(&row, "is_express")?,
        column(&row, "shipping_cost")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_list_covers_every_field() {
        let columns: Vec<&str> = SHIPMENT_COLUMNS.split(',').map(str::trim).collect();
        assert_eq!(columns.len(), 15);
        assert!(columns.contains(&"tracking_number"));
        assert!(columns.contains(&"shipping_cost"));
    }
}
