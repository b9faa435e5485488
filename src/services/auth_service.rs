//! Authentication service - Signup and login use cases.
//!
//! Each call is a linear pipeline: validate, optionally look the email up,
//! decide, and (signup only) persist. Nothing is retried.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{
    FIELD_EMAIL, FIELD_PASSWORD, MAX_FIELD_LENGTH, MIN_FIELD_LENGTH, MSG_CREATE_FAILED,
    MSG_CREDENTIALS_MISMATCH, MSG_EMAIL_TAKEN,
};
use crate::domain::{Credentials, FieldCheck, User, ValidationErrors};
use crate::errors::{AppError, AppResult};
use crate::infra::{StorageError, UserStorage};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return its identifier
    async fn signup(&self, credentials: Credentials) -> AppResult<i32>;

    /// Check credentials and return the stored user
    async fn login(&self, credentials: Credentials) -> AppResult<User>;
}

/// Signup applies both rules to both fields.
fn validate_signup(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    FieldCheck::new(&mut errors, FIELD_EMAIL, &credentials.email)
        .not_empty()
        .length_between(MIN_FIELD_LENGTH, MAX_FIELD_LENGTH);
    FieldCheck::new(&mut errors, FIELD_PASSWORD, &credentials.password)
        .not_empty()
        .length_between(MIN_FIELD_LENGTH, MAX_FIELD_LENGTH);

    errors
}

/// Login only requires both fields to be present.
fn validate_login(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    FieldCheck::new(&mut errors, FIELD_EMAIL, &credentials.email).not_empty();
    FieldCheck::new(&mut errors, FIELD_PASSWORD, &credentials.password).not_empty();

    errors
}

fn credentials_mismatch() -> AppError {
    AppError::Validation(ValidationErrors::non_field(MSG_CREDENTIALS_MISMATCH))
}

/// Concrete implementation of AuthService over a UserStorage backend.
pub struct Authenticator {
    storage: Arc<dyn UserStorage>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    #[tracing::instrument(skip_all, fields(email = %credentials.email))]
    async fn signup(&self, credentials: Credentials) -> AppResult<i32> {
        let mut errors = validate_signup(&credentials);

        // Only look the email up once it passed its own rules
        if !errors.has(FIELD_EMAIL) {
            match self.storage.get_user_by_email(&credentials.email).await {
                Err(StorageError::NotFound) => {}
                Ok(_) => errors.add(FIELD_EMAIL, MSG_EMAIL_TAKEN),
                Err(e) => errors.add(FIELD_EMAIL, e.to_string()),
            }
        }

        errors.into_result()?;

        let user = User::from(credentials);
        match self.storage.create_user(&user).await {
            Ok(id) => {
                tracing::info!(id, "User created");
                Ok(id)
            }
            // Lost a race with another signup for the same email
            Err(StorageError::Duplicate(message)) => {
                let mut errors = ValidationErrors::new();
                errors.add(FIELD_EMAIL, message);
                Err(AppError::Validation(errors))
            }
            Err(e) => {
                tracing::error!(error = %e, "insert users failed");
                Err(AppError::Unavailable(ValidationErrors::non_field(
                    MSG_CREATE_FAILED,
                )))
            }
        }
    }

    #[tracing::instrument(skip_all, fields(email = %credentials.email))]
    async fn login(&self, credentials: Credentials) -> AppResult<User> {
        validate_login(&credentials).into_result()?;

        match self.storage.get_user_by_email(&credentials.email).await {
            Ok(user) if user.password == credentials.password => Ok(user),
            Ok(_) => {
                tracing::debug!("password mismatch");
                Err(credentials_mismatch())
            }
            Err(StorageError::NotFound) => {
                tracing::debug!("unknown email");
                Err(credentials_mismatch())
            }
            Err(e) => {
                tracing::warn!(error = %e, "user lookup failed");
                Err(credentials_mismatch())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::*;
    use crate::config::NON_FIELD_ERROR_KEY;
    use crate::infra::MockUserStorage;

    fn stored_user(email: &str, password: &str) -> User {
        User {
            id: Some(5),
            ..User::new(email, password)
        }
    }

    fn validation_errors(result: AppResult<impl std::fmt::Debug>) -> ValidationErrors {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn signup_skips_lookup_when_email_invalid() {
        let mut storage = MockUserStorage::new();
        storage.expect_get_user_by_email().never();
        storage.expect_create_user().never();

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.signup(Credentials::new("", "")).await);

        assert_eq!(errors.get("email").unwrap()[0], "cannot be empty");
        assert_eq!(errors.get("password").unwrap()[0], "cannot be empty");
    }

    #[tokio::test]
    async fn signup_skips_lookup_when_email_too_short() {
        let mut storage = MockUserStorage::new();
        storage.expect_get_user_by_email().never();
        storage.expect_create_user().never();

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.signup(Credentials::new("a@b", "pass1234")).await);

        assert_eq!(errors.get("email").unwrap(), ["length is not between 4 and 120"]);
        assert!(!errors.has("password"));
    }

    #[tokio::test]
    async fn signup_checks_email_even_when_password_invalid() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_get_user_by_email()
            .times(1)
            .returning(|email| Ok(stored_user(email, "old-pass")));
        storage.expect_create_user().never();

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.signup(Credentials::new("taken@b.cd", "")).await);

        assert_eq!(errors.get("email").unwrap(), [MSG_EMAIL_TAKEN]);
        assert!(errors.has("password"));
    }

    #[tokio::test]
    async fn signup_not_found_proceeds_to_create() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_get_user_by_email()
            .returning(|_| Err(StorageError::NotFound));
        storage
            .expect_create_user()
            .withf(|user: &User| {
                user.email == "new@b.cd" && user.password == "pass1234" && user.id.is_none()
            })
            .times(1)
            .returning(|_| Ok(9));

        let service = Authenticator::new(Arc::new(storage));
        let id = service
            .signup(Credentials::new("new@b.cd", "pass1234"))
            .await
            .unwrap();

        assert_eq!(id, 9);
    }

    #[tokio::test]
    async fn signup_lookup_error_is_reported_under_email() {
        let mut storage = MockUserStorage::new();
        storage.expect_get_user_by_email().returning(|_| {
            Err(StorageError::Database(DbErr::Custom(
                "connection refused".to_string(),
            )))
        });
        storage.expect_create_user().never();

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.signup(Credentials::new("new@b.cd", "pass1234")).await);

        let messages = errors.get("email").unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("connection refused"));
    }

    #[tokio::test]
    async fn signup_create_conflict_is_reported_under_email() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_get_user_by_email()
            .returning(|_| Err(StorageError::NotFound));
        storage.expect_create_user().returning(|_| {
            Err(StorageError::Duplicate(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            ))
        });

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.signup(Credentials::new("new@b.cd", "pass1234")).await);

        assert!(errors.get("email").unwrap()[0].contains("users_email_key"));
    }

    #[tokio::test]
    async fn signup_create_failure_is_unavailable() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_get_user_by_email()
            .returning(|_| Err(StorageError::NotFound));
        storage
            .expect_create_user()
            .returning(|_| Err(StorageError::Database(DbErr::Custom("disk full".to_string()))));

        let service = Authenticator::new(Arc::new(storage));
        let result = service.signup(Credentials::new("new@b.cd", "pass1234")).await;

        match result {
            Err(AppError::Unavailable(errors)) => {
                assert_eq!(errors.get(NON_FIELD_ERROR_KEY).unwrap(), [MSG_CREATE_FAILED]);
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn login_skips_lookup_when_fields_empty() {
        let mut storage = MockUserStorage::new();
        storage.expect_get_user_by_email().never();

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.login(Credentials::new("", "")).await);

        assert!(errors.has("email"));
        assert!(errors.has("password"));
    }

    #[tokio::test]
    async fn login_does_not_check_length() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_get_user_by_email()
            .returning(|email| Ok(stored_user(email, "abc")));

        let service = Authenticator::new(Arc::new(storage));
        let user = service.login(Credentials::new("a@b", "abc")).await.unwrap();

        assert_eq!(user.id, Some(5));
    }

    #[tokio::test]
    async fn login_lookup_error_is_generic() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_get_user_by_email()
            .returning(|_| Err(StorageError::Database(DbErr::Custom("timeout".to_string()))));

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.login(Credentials::new("a@b.cd", "pass1234")).await);

        assert_eq!(errors.get(NON_FIELD_ERROR_KEY).unwrap(), [MSG_CREDENTIALS_MISMATCH]);
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let mut storage = MockUserStorage::new();
        storage
            .expect_get_user_by_email()
            .returning(|email| Ok(stored_user(email, "right-pass")));

        let service = Authenticator::new(Arc::new(storage));
        let errors = validation_errors(service.login(Credentials::new("a@b.cd", "wrong-pass")).await);

        assert_eq!(errors.get(NON_FIELD_ERROR_KEY).unwrap(), [MSG_CREDENTIALS_MISMATCH]);
    }
}
