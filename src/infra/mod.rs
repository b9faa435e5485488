//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections
//! - User storage backends (PostgreSQL, in-memory)

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{InMemoryUserStorage, PgUserStorage, StorageError, UserStorage};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserStorage;
