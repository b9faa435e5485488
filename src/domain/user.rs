//! User domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// `id` stays `None` until storage assigns one. The password is opaque at
/// this layer and is never serialized back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 42)]
    pub id: Option<i32>,
    #[schema(example = "user@example.com")]
    pub email: String,
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDateTime>,
}

impl User {
    /// Create an unpersisted user
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            password: password.into(),
            created_at: None,
            last_login: None,
        }
    }

    /// Check if storage has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Email and password as submitted to `/signup` and `/login`.
///
/// Absent fields deserialize as empty strings so they surface as validation
/// errors rather than body rejections.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct Credentials {
    #[serde(default)]
    #[schema(example = "user@example.com", max_length = 120)]
    pub email: String,
    #[serde(default)]
    #[schema(example = "s3cret", max_length = 120)]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl From<Credentials> for User {
    fn from(credentials: Credentials) -> Self {
        User::new(credentials.email, credentials.password)
    }
}
