//! List Users Use Case

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use std::sync::Arc;

/// List Users Use Case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Vec<User> {
        let users = self.repo.list().await;

        tracing::debug!(count = users.len(), "Listed users");

        users
    }
}
