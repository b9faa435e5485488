//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod memory;
mod user_storage;
mod user_store;

pub use memory::InMemoryUserStorage;
pub use user_storage::{StorageError, UserStorage};
pub use user_store::PgUserStorage;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_storage::MockUserStorage;
