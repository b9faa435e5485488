//! Application settings loaded from environment variables.

use std::env;

use super::constants::DEFAULT_DB_HOST;
use crate::errors::{AppError, AppResult};

/// Database connection settings
#[derive(Clone)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    db_password: String,
    pub db_name: String,
    /// Full connection URL; overrides the individual DB_* parts when set
    database_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when present. Otherwise `DB_USERNAME` and `DB_NAME`
    /// are required and `DB_HOST` falls back to localhost.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let database_url = non_empty("DATABASE_URL");

        let db_host = non_empty("DB_HOST").unwrap_or_else(|| {
            if database_url.is_none() {
                tracing::warn!("DB_HOST not set, using {}", DEFAULT_DB_HOST);
            }
            DEFAULT_DB_HOST.to_string()
        });
        let db_user = non_empty("DB_USERNAME").unwrap_or_default();
        let db_password = lookup("DB_PASSWORD").unwrap_or_default();
        let db_name = non_empty("DB_NAME").unwrap_or_default();

        if database_url.is_none() {
            if db_user.is_empty() {
                return Err(AppError::config("empty user string, set DB_USERNAME"));
            }
            if db_name.is_empty() {
                return Err(AppError::config("empty dbname string, set DB_NAME"));
            }
        }

        Ok(Self {
            db_host,
            db_user,
            db_password,
            db_name,
            database_url,
        })
    }

    /// Connection URL handed to the database driver.
    ///
    /// Credentials are not percent-encoded; use DATABASE_URL for passwords
    /// containing URL-reserved characters.
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}/{}?sslmode=disable",
                self.db_user, self.db_password, self.db_host, self.db_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn builds_url_from_parts() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "db"),
            ("DB_USERNAME", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "users"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url(),
            "postgres://app:secret@db/users?sslmode=disable"
        );
    }

    #[test]
    fn host_defaults_to_localhost() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_USERNAME", "app"),
            ("DB_NAME", "users"),
        ]))
        .unwrap();

        assert_eq!(config.db_host, "localhost");
    }

    #[test]
    fn missing_user_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("DB_NAME", "users")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn missing_dbname_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("DB_USERNAME", "app")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = Config::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://u:p@elsewhere/db",
        )]))
        .unwrap();

        assert_eq!(config.database_url(), "postgres://u:p@elsewhere/db");
    }

    #[test]
    fn debug_redacts_password() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_USERNAME", "app"),
            ("DB_PASSWORD", "hunter22"),
            ("DB_NAME", "users"),
        ]))
        .unwrap();

        assert!(!format!("{:?}", config).contains("hunter22"));
    }
}
