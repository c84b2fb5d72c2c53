//! Shipment aggregate entity.
//!
//! A shipment belongs to exactly one user for its whole life. Its
//! shipping cost is always derived from weight, priority and the express
//! flag; callers cannot set it.

use serde::{Deserialize, Serialize};

use super::pricing::calculate_shipping_cost;
use super::{Priority, ShipmentStatus, TrackingNumber};
use crate::domain::foundation::{OwnedByUser, ShipmentId, Timestamp, UserId, ValidationError};

/// Maximum length for sender and recipient names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for sender and recipient addresses.
pub const MAX_ADDRESS_LENGTH: usize = 500;

/// Maximum length for the package description.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Heaviest accepted package, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// The client-supplied fields of a shipment.
///
/// Used for both creation and full-field update; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    pub sender_name: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    #[serde(default)]
    pub package_description: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub status: ShipmentStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_express: bool,
}

impl ShipmentDetails {
    /// Checks field rules after trimming.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails, naming the offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("sender_name", &self.sender_name, MAX_NAME_LENGTH)?;
        required_text("sender_address", &self.sender_address, MAX_ADDRESS_LENGTH)?;
        required_text("recipient_name", &self.recipient_name, MAX_NAME_LENGTH)?;
        required_text("recipient_address", &self.recipient_address, MAX_ADDRESS_LENGTH)?;

        if let Some(description) = &self.package_description {
            max_len("package_description", description.trim(), MAX_DESCRIPTION_LENGTH)?;
        }

        if let Some(weight) = self.weight {
            if !weight.is_finite() {
                return Err(ValidationError::invalid_format("weight", "must be a valid number"));
            }
            if !(0.0..=MAX_WEIGHT_KG).contains(&weight) {
                return Err(ValidationError::out_of_range("weight", 0.0, MAX_WEIGHT_KG, weight));
            }
        }

        Ok(())
    }

    /// Returns a copy with text trimmed and a blank description dropped.
    fn normalized(self) -> Self {
        let package_description = self
            .package_description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self {
            sender_name: self.sender_name.trim().to_string(),
            sender_address: self.sender_address.trim().to_string(),
            recipient_name: self.recipient_name.trim().to_string(),
            recipient_address: self.recipient_address.trim().to_string(),
            package_description,
            ..self
        }
    }
}

fn required_text(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    max_len(field, value, max)
}

fn max_len(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::too_long(field, max, len));
    }
    Ok(())
}

/// Shipment aggregate.
///
/// # Invariants
///
/// - `user_id` never changes after creation
/// - `weight` is never undefined; absent input is stored as `0.0`
/// - `shipping_cost` equals the tariff for the current weight, priority
///   and express flag
/// - `id` and `tracking_number` are `None` only before the first save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    id: Option<ShipmentId>,
    tracking_number: Option<TrackingNumber>,
    user_id: UserId,
    sender_name: String,
    sender_address: String,
    recipient_name: String,
    recipient_address: String,
    package_description: Option<String>,
    weight: f64,
    status: ShipmentStatus,
    priority: Priority,
    is_express: bool,
    shipping_cost: f64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Shipment {
    /// Create a new, unsaved shipment for `user_id`.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if any field rule fails
    pub fn new(user_id: UserId, details: ShipmentDetails) -> Result<Self, ValidationError> {
        details.validate()?;
        let details = details.normalized();

        let now = Timestamp::now();
        let mut shipment = Self {
            id: None,
            tracking_number: None,
            user_id,
            sender_name: details.sender_name,
            sender_address: details.sender_address,
            recipient_name: details.recipient_name,
            recipient_address: details.recipient_address,
            package_description: details.package_description,
            weight: details.weight.unwrap_or(0.0),
            status: details.status,
            priority: details.priority,
            is_express: details.is_express,
            shipping_cost: 0.0,
            created_at: now,
            updated_at: now,
        };
        shipment.reprice();
        Ok(shipment)
    }

    /// Reconstitute a shipment from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ShipmentId,
        tracking_number: TrackingNumber,
        user_id: UserId,
        sender_name: String,
        sender_address: String,
        recipient_name: String,
        recipient_address: String,
        package_description: Option<String>,
        weight: Option<f64>,
        status: ShipmentStatus,
        priority: Priority,
        is_express: bool,
        shipping_cost: f64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id: Some(id),
            tracking_number: Some(tracking_number),
            user_id,
            sender_name,
            sender_address,
            recipient_name,
            recipient_address,
            package_description,
            weight: weight.unwrap_or(0.0),
            status,
            priority,
            is_express,
            shipping_cost,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> Option<ShipmentId> {
        self.id
    }

    pub fn tracking_number(&self) -> Option<&TrackingNumber> {
        self.tracking_number.as_ref()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn sender_address(&self) -> &str {
        &self.sender_address
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn recipient_address(&self) -> &str {
        &self.recipient_address
    }

    pub fn package_description(&self) -> Option<&str> {
        self.package_description.as_deref()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_express(&self) -> bool {
        self.is_express
    }

    pub fn shipping_cost(&self) -> f64 {
        self.shipping_cost
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true once the shipment has a database key.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace every client-supplied field.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if any field rule fails; the shipment is unchanged
    pub fn apply_details(&mut self, details: ShipmentDetails) -> Result<(), ValidationError> {
        details.validate()?;
        let details = details.normalized();

        self.sender_name = details.sender_name;
        self.sender_address = details.sender_address;
        self.recipient_name = details.recipient_name;
        self.recipient_address = details.recipient_address;
        self.package_description = details.package_description;
        self.weight = details.weight.unwrap_or(0.0);
        self.status = details.status;
        self.priority = details.priority;
        self.is_express = details.is_express;
        self.reprice();
        self.touch();
        Ok(())
    }

    /// Flip the express flag. Returns the new value.
    pub fn toggle_express(&mut self) -> bool {
        self.is_express = !self.is_express;
        self.reprice();
        self.touch();
        self.is_express
    }

    /// Recompute the shipping cost from the current fields.
    pub fn reprice(&mut self) {
        self.shipping_cost = calculate_shipping_cost(Some(self.weight), self.priority, self.is_express);
    }

    /// Set the tracking number, replacing any previous candidate.
    pub fn assign_tracking_number(&mut self, tracking_number: TrackingNumber) {
        self.tracking_number = Some(tracking_number);
    }

    /// Record the key assigned by storage on first insert.
    pub fn mark_persisted(&mut self, id: ShipmentId) {
        self.id = Some(id);
    }

    /// Refresh the modification timestamp.
    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl OwnedByUser for Shipment {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}
