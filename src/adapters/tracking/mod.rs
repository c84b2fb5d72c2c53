//! Tracking number sources.
//!
//! - `RandomTrackingNumbers` - production source backed by `rand`

mod random;

pub use random::RandomTrackingNumbers;
