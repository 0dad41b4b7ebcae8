//! Application Configuration
//!
//! Configuration for the users application layer.

/// Default maximum accepted request body (64 KiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Users application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersConfig {
    /// Maximum accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
