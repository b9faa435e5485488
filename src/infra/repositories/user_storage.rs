//! Storage contract for user accounts.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage failures callers need to tell apart
#[derive(Error, Debug)]
pub enum StorageError {
    /// No row matched; signup treats this as "email available"
    #[error("user not found")]
    NotFound,

    /// Email already taken; carries the backend's own message
    #[error("{0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// User storage trait for dependency injection.
///
/// Email is the unique lookup key. Backends must reject a second user with
/// the same email atomically, since callers do not lock between lookup and
/// create.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Find a user by exact email match
    async fn get_user_by_email(&self, email: &str) -> Result<User, StorageError>;

    /// Insert a user and return its assigned identifier
    async fn create_user(&self, user: &User) -> Result<i32, StorageError>;

    /// Check backend connectivity
    async fn ping(&self) -> Result<(), StorageError>;
}
