//! Auth API - signup and login backend over a `users` table.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment configuration and constants
//! - **domain**: User entity and field-keyed validation
//! - **services**: Signup and login use cases
//! - **infra**: Database connection and user storage backends
//! - **api**: HTTP handlers, CORS middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against PostgreSQL (DB_* variables or DATABASE_URL)
//! cargo run -- serve
//!
//! # Start without a database
//! cargo run -- serve --in-memory --port 8000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credentials, User, ValidationErrors};
pub use errors::{AppError, AppResult};
