//! Database connection and initialization.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};

use crate::config::Config;

/// Database wrapper for connection management
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool.
    ///
    /// The `users` table is expected to exist already; no schema management
    /// happens here.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url());
        options.sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(host = %config.db_host, db = %config.db_name, "Database connected");

        Ok(Self { connection })
    }

    /// Hand the connection pool over to its owner.
    pub fn into_connection(self) -> DatabaseConnection {
        self.connection
    }
}
