//! In-memory user storage for tests and database-less local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::user_storage::{StorageError, UserStorage};
use crate::domain::User;

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    last_id: i32,
}

/// UserStorage kept in process memory.
///
/// Ids start at 1 and increase by one per insert. The duplicate check and
/// the insert share one write lock, so concurrent signups for the same email
/// cannot both succeed.
#[derive(Default)]
pub struct InMemoryUserStorage {
    inner: RwLock<Inner>,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStorage for InMemoryUserStorage {
    async fn get_user_by_email(&self, email: &str) -> Result<User, StorageError> {
        self.inner
            .read()
            .await
            .users
            .get(email)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn create_user(&self, user: &User) -> Result<i32, StorageError> {
        let mut inner = self.inner.write().await;

        if inner.users.contains_key(&user.email) {
            return Err(StorageError::Duplicate(format!(
                "user with email {} already exists",
                user.email
            )));
        }

        inner.last_id += 1;
        let id = inner.last_id;

        let stored = User {
            id: Some(id),
            created_at: Some(Utc::now().naive_utc()),
            last_login: None,
            ..user.clone()
        };
        inner.users.insert(stored.email.clone(), stored);

        Ok(id)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
