//! Delivery priority and its pricing multiplier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Delivery priority chosen by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Standard,
    Priority,
    Urgent,
}

impl Priority {
    const ALL: [Priority; 3] = [Priority::Standard, Priority::Priority, Priority::Urgent];

    /// All priorities in display order.
    pub fn choices() -> &'static [Priority] {
        &Self::ALL
    }

    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Standard => "standard",
            Priority::Priority => "priority",
            Priority::Urgent => "urgent",
        }
    }

    /// Factor applied to the weight-based subtotal.
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Priority::Standard => 1.0,
            Priority::Priority => 1.5,
            Priority::Urgent => 2.0,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("priority", format!("unknown priority '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_tariff() {
        assert_eq!(Priority::Standard.cost_multiplier(), 1.0);
        assert_eq!(Priority::Priority.cost_multiplier(), 1.5);
        assert_eq!(Priority::Urgent.cost_multiplier(), 2.0);
    }

    #[test]
    fn parses_known_and_rejects_unknown() {
        assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!("URGENT".parse::<Priority>().is_err());
        assert!("express".parse::<Priority>().is_err());
    }

    #[test]
    fn choices_are_ordered_by_speed() {
        assert_eq!(
            Priority::choices(),
            &[Priority::Standard, Priority::Priority, Priority::Urgent]
        );
    }
}
