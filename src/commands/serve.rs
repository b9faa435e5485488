//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, InMemoryUserStorage, PgUserStorage, UserStorage};

/// Pick the storage backend requested on the command line
async fn build_storage(args: &ServeArgs) -> AppResult<Arc<dyn UserStorage>> {
    if args.in_memory {
        tracing::warn!("Using in-memory storage, users are lost on shutdown");
        return Ok(Arc::new(InMemoryUserStorage::new()));
    }

    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let db = Database::connect(&config).await?;
    Ok(Arc::new(PgUserStorage::new(db.into_connection())))
}

/// Execute the serve command
pub async fn execute(args: ServeArgs) -> AppResult<()> {
    tracing::info!("Starting server...");

    let storage = build_storage(&args).await?;
    let app = create_router(AppState::from_storage(storage));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
