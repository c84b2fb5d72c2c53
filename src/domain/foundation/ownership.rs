//! Ownership trait for user-owned resources.
//!
//! Shipments are exclusively owned by one user. Storage queries already
//! filter by owner, so this trait is the in-memory counterpart used by
//! adapters that evaluate owner scoping themselves.

use super::UserId;

/// Trait for aggregates that have a single owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }
}
