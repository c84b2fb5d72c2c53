//! Random tracking number source.

use rand::Rng;

use crate::domain::shipment::TrackingNumber;
use crate::ports::TrackingNumberSource;

/// Exclusive upper bound of the eight-digit suffix.
const SUFFIX_SPACE: u32 = 100_000_000;

/// Draws suffixes uniformly from `0..10^8` using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTrackingNumbers;

impl RandomTrackingNumbers {
    pub fn new() -> Self {
        Self
    }
}

impl TrackingNumberSource for RandomTrackingNumbers {
    fn next_candidate(&self) -> TrackingNumber {
        let suffix = rand::thread_rng().gen_range(0..SUFFIX_SPACE);
        TrackingNumber::from_low_digits(suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_numbers_have_valid_shape() {
        let source = RandomTrackingNumbers::new();
        for _ in 0..100 {
            let tn = source.next_candidate();
            assert!(tn.as_str().parse::<TrackingNumber>().is_ok());
        }
    }

    #[test]
    fn random_numbers_rarely_repeat() {
        let source = RandomTrackingNumbers::new();
        let drawn: HashSet<_> = (0..1_000).map(|_| source.next_candidate()).collect();
        // Birthday bound for 1000 draws from 10^8 is ~0.5%; allow a couple.
        assert!(drawn.len() >= 998);
    }
}
