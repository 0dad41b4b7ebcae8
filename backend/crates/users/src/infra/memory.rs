//! In-Memory Repository Implementation
//!
//! The directory lives in a `HashMap` behind a single reader/writer lock.
//! Reads share the lock, writes take it exclusively. The lock is never
//! exposed; callers only see the repository operations.

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::UserId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local user store
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the default `{"1", "bob"}` entry
    pub fn seeded() -> Self {
        Self::with_users([User::seed()])
    }

    /// Create a store from initial records. Later duplicates overwrite earlier ones.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Vec<User> {
        // Copy while the read guard is held so later writes cannot touch the snapshot.
        let users = self.users.read().await;
        users.values().cloned().collect()
    }

    async fn get(&self, id: &UserId) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    async fn put(&self, user: User) -> User {
        let previous = self
            .users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        if previous.is_some() {
            tracing::debug!(user_id = %user.id, "Overwrote existing user");
        }
        user
    }

    async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
