//! Repository Traits
//!
//! Interfaces for user storage. Implementation is in infrastructure layer.
//!
//! None of the operations can fail: absence is reported as `None`, and
//! writes always succeed with "last write wins" semantics.

use crate::domain::entities::User;
use crate::domain::value_objects::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Snapshot of all users, in no particular order
    async fn list(&self) -> Vec<User>;

    /// Find user by ID
    async fn get(&self, id: &UserId) -> Option<User>;

    /// Insert or overwrite the user keyed by `user.id`, returning the stored value
    async fn put(&self, user: User) -> User;

    /// Number of stored users
    async fn count(&self) -> usize;
}
