//! Users (User Directory) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - In-memory store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Concurrency Model
//! - The store is the only shared mutable state, owned by the process entry point
//! - Reads (list/get) share a reader/writer lock, writes (put) hold it exclusively
//! - Listing copies records out under the read lock; handlers never hold references
//! - Concurrent writes to one identifier resolve as "last write wins"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UsersConfig;
pub use domain::entities::User;
pub use domain::repository::UserRepository;
pub use error::{UsersError, UsersResult};
pub use infra::memory::MemoryUserRepository;
pub use presentation::router::users_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
