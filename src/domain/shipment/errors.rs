//! Shipment-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ShipmentId, ValidationError};

/// Shipment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipmentError {
    /// No shipment with this id is visible to the caller.
    NotFound(ShipmentId),
    /// No shipment carries this tracking number.
    TrackingNumberNotFound(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// A storage integrity rule rejected the write.
    ConstraintViolation { constraint: String, message: String },
    /// Storage is unreachable or failed.
    Storage(String),
}

impl ShipmentError {
    pub fn not_found(id: ShipmentId) -> Self {
        ShipmentError::NotFound(id)
    }
    pub fn tracking_number_not_found(tracking_number: impl Into<String>) -> Self {
        ShipmentError::TrackingNumberNotFound(tracking_number.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ShipmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn storage(message: impl Into<String>) -> Self {
        ShipmentError::Storage(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ShipmentError::NotFound(_) | ShipmentError::TrackingNumberNotFound(_) => {
                ErrorCode::ShipmentNotFound
            }
            ShipmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ShipmentError::ConstraintViolation { .. } => ErrorCode::ConstraintViolation,
            ShipmentError::Storage(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ShipmentError::NotFound(id) => format!("Shipment not found: {}", id),
            ShipmentError::TrackingNumberNotFound(tn) => {
                format!("No shipment with tracking number {}", tn)
            }
            ShipmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ShipmentError::ConstraintViolation { constraint, message } => {
                format!("Constraint '{}' violated: {}", constraint, message)
            }
            ShipmentError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for ShipmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ShipmentError {}

impl From<ValidationError> for ShipmentError {
    fn from(err: ValidationError) -> Self {
        ShipmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ShipmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ShipmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::ConstraintViolation => ShipmentError::ConstraintViolation {
                constraint: err
                    .violated_constraint()
                    .unwrap_or("unknown")
                    .to_string(),
                message: err.message,
            },
            _ => ShipmentError::Storage(err.to_string()),
        }
    }
}
