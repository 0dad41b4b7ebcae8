//! Create User Use Case
//!
//! Inserts a user, overwriting any existing entry with the same identifier.

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::error::{UsersError, UsersResult};
use std::sync::Arc;

/// Create user input
pub struct CreateUserInput {
    pub id: String,
    pub name: String,
}

/// Create User Use Case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UsersResult<User> {
        let user = User::try_from_parts(input.id, input.name)
            .map_err(|e| UsersError::InvalidRequest(e.to_string()))?;

        let stored = self.repo.put(user).await;

        tracing::info!(user_id = %stored.id, "Stored user");

        Ok(stored)
    }
}
