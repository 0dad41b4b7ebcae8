//! API DTOs (Data Transfer Objects)

use crate::domain::entities::User;
use serde::{Deserialize, Serialize};

/// Wire form of a user, returned by every successful endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name.into_inner(),
        }
    }
}

/// Request for POST /users
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub id: String,
    pub name: String,
}
