//! Classification of sqlx errors into domain error kinds.
//!
//! Integrity violations (unique, foreign key, check) become
//! `ConstraintViolation` carrying the constraint name. Everything else is a
//! storage fault and is logged here before being returned.

use crate::domain::foundation::DomainError;

/// Converts a sqlx error raised while performing `action`.
pub(crate) fn map_sqlx_error(action: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return constraint_violation(action, db_err.constraint(), db_err.message());
        }
    }

    tracing::error!(error = %err, action, "Database operation failed");
    DomainError::database(format!("Failed to {}: {}", action, err))
}

fn constraint_violation(action: &str, constraint: Option<&str>, message: &str) -> DomainError {
    let constraint = constraint.unwrap_or("unknown");
    tracing::debug!(constraint, action, "Constraint violated");
    DomainError::constraint_violation(constraint, format!("Failed to {}: {}", action, message))
}

/// Error for a row whose stored value cannot be mapped back into the domain.
pub(crate) fn corrupt_row(column: &str, detail: impl std::fmt::Display) -> DomainError {
    tracing::error!(column, %detail, "Unreadable shipment row");
    DomainError::database(format!("Invalid value in column {}: {}", column, detail))
}
