//! Domain Value Objects
//!
//! Both fields of a user are caller-supplied strings. The only rule enforced
//! is presence: an empty identifier or name is rejected. Identifiers are not
//! checked for well-formedness.

use std::fmt;
use thiserror::Error;

/// Validation failure for a user field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserFieldError {
    #[error("user id cannot be empty")]
    EmptyId,

    #[error("user name cannot be empty")]
    EmptyName,
}

/// Caller-supplied user identifier, the unique key of the directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Result<Self, UserFieldError> {
        let value = value.into();
        if value.is_empty() {
            return Err(UserFieldError::EmptyId);
        }
        Ok(Self(value))
    }

    /// Create from a value known to be valid (seed data)
    pub(crate) fn from_trusted(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Whether the identifier is made only of ASCII decimal digits,
    /// the only shape addressable through `GET /users/{id}`
    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: impl Into<String>) -> Result<Self, UserFieldError> {
        let value = value.into();
        if value.is_empty() {
            return Err(UserFieldError::EmptyName);
        }
        Ok(Self(value))
    }

    pub(crate) fn from_trusted(value: &str) -> Self {
        Self(value.to_owned())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}
