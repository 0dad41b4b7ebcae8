//! Get User Use Case

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::UserId;
use crate::error::{UsersError, UsersResult};
use std::sync::Arc;

/// Get User Use Case
pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &UserId) -> UsersResult<User> {
        let user = self.repo.get(id).await;

        if user.is_none() {
            tracing::debug!(user_id = %id, "User lookup missed");
        }

        user.ok_or(UsersError::UserNotFound)
    }
}
