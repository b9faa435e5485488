//! PostgreSQL-backed user storage.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, Set, SqlErr, Statement,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::user_storage::{StorageError, UserStorage};
use crate::domain::User;

/// Concrete implementation of UserStorage over the `users` table
pub struct PgUserStorage {
    db: DatabaseConnection,
}

impl PgUserStorage {
    /// Create new storage instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: DbErr) -> StorageError {
    classify_insert_error(err.sql_err(), err)
}

/// Unique violations become `Duplicate` with the backend's message intact
fn classify_insert_error(sql_err: Option<SqlErr>, err: DbErr) -> StorageError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(message)) => StorageError::Duplicate(message),
        _ => StorageError::Database(err),
    }
}

#[async_trait]
impl UserStorage for PgUserStorage {
    async fn get_user_by_email(&self, email: &str) -> Result<User, StorageError> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(StorageError::NotFound)
    }

    async fn create_user(&self, user: &User) -> Result<i32, StorageError> {
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            created_at: Set(Some(Utc::now().naive_utc())),
            last_login: Set(None),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        Ok(model.id)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
