//! Domain Entities

use crate::domain::value_objects::{UserFieldError, UserId, UserName};

/// Identifier of the entry every fresh directory is seeded with
pub const SEED_USER_ID: &str = "1";

/// Name of the entry every fresh directory is seeded with
pub const SEED_USER_NAME: &str = "bob";

/// User entity - a directory record keyed by its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
}

impl User {
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Validate raw field values and build a user
    pub fn try_from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, UserFieldError> {
        Ok(Self::new(UserId::new(id)?, UserName::new(name)?))
    }

    /// The `{"1", "bob"}` entry present at process start
    pub fn seed() -> Self {
        Self {
            id: UserId::from_trusted(SEED_USER_ID),
            name: UserName::from_trusted(SEED_USER_NAME),
        }
    }
}
