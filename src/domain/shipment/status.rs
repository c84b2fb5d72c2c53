//! ShipmentStatus enum for tracking where a package is in its journey.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lifecycle status of a shipment.
///
/// No transition graph is enforced: any status may be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Returned,
}

impl ShipmentStatus {
    const ALL: [ShipmentStatus; 6] = [
        ShipmentStatus::Pending,
        ShipmentStatus::PickedUp,
        ShipmentStatus::InTransit,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
        ShipmentStatus::Returned,
    ];

    /// All statuses in display order.
    pub fn choices() -> &'static [ShipmentStatus] {
        &Self::ALL
    }

    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::PickedUp => "picked_up",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::OutForDelivery => "out_for_delivery",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Returned => "returned",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("status", format!("unknown status '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(ShipmentStatus::default(), ShipmentStatus::Pending);
    }

    #[test]
    fn choices_are_in_lifecycle_order() {
        let names: Vec<&str> = ShipmentStatus::choices().iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec!["pending", "picked_up", "in_transit", "out_for_delivery", "delivered", "returned"]
        );
    }

    #[test]
    fn parses_every_choice() {
        for status in ShipmentStatus::choices() {
            assert_eq!(status.as_str().parse::<ShipmentStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "lost".parse::<ShipmentStatus>().unwrap_err();
        assert_eq!(err.field(), "status");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ShipmentStatus::OutForDelivery).unwrap(),
            "\"out_for_delivery\""
        );
        let status: ShipmentStatus = serde_json::from_str("\"picked_up\"").unwrap();
        assert_eq!(status, ShipmentStatus::PickedUp);
    }
}
