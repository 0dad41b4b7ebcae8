//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (User)
//! - Domain value objects (UserId, UserName)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
