//! Human-facing tracking numbers.
//!
//! Format: the fixed prefix `SHP` followed by exactly eight decimal digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Fixed prefix of every tracking number.
pub const TRACKING_PREFIX: &str = "SHP";

/// Number of random digits after the prefix.
pub const TRACKING_DIGITS: usize = 8;

/// Total length of a tracking number.
pub const TRACKING_NUMBER_LEN: usize = TRACKING_PREFIX.len() + TRACKING_DIGITS;

/// A syntactically valid tracking number, always upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Builds a tracking number from the eight-digit suffix.
    pub fn from_digits(digits: u32) -> Result<Self, ValidationError> {
        if digits >= 100_000_000 {
            return Err(ValidationError::invalid_format(
                "tracking_number",
                "suffix must have at most 8 digits",
            ));
        }
        Ok(Self(format!("{}{:08}", TRACKING_PREFIX, digits)))
    }

    /// Builds a tracking number from the last eight decimal digits of `value`.
    pub fn from_low_digits(value: u32) -> Self {
        Self(format!("{}{:08}", TRACKING_PREFIX, value % 100_000_000))
    }

    /// Parses user input, ignoring surrounding whitespace and letter case.
    pub fn parse_lenient(input: &str) -> Result<Self, ValidationError> {
        input.trim().to_uppercase().parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TrackingNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(TRACKING_PREFIX).ok_or_else(|| {
            ValidationError::invalid_format("tracking_number", "must start with SHP")
        })?;
        if digits.len() != TRACKING_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "tracking_number",
                "must be SHP followed by 8 digits",
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for TrackingNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TrackingNumber> for String {
    fn from(value: TrackingNumber) -> Self {
        value.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
