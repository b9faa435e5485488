//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Validation
// =============================================================================

/// Minimum accepted length (in characters) for email and password on signup
pub const MIN_FIELD_LENGTH: u64 = 4;

/// Maximum accepted length (in characters) for email and password on signup
pub const MAX_FIELD_LENGTH: u64 = 120;

/// Error map key for failures that do not belong to a single field
pub const NON_FIELD_ERROR_KEY: &str = "__error__";

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_PASSWORD_CONFIRMATION: &str = "password2";

// =============================================================================
// User-facing messages
// =============================================================================

pub const MSG_CANNOT_BE_EMPTY: &str = "cannot be empty";

pub const MSG_EMAIL_TAKEN: &str = "email is already registered";

/// Login denial; never reveals which of the two fields was wrong
pub const MSG_CREDENTIALS_MISMATCH: &str = "email or password do not match";

pub const MSG_CREATE_FAILED: &str = "cannot create user, please try again in few minutes";

pub const MSG_INTERNAL: &str = "an internal error occurred";

// =============================================================================
// CORS
// =============================================================================

pub const CORS_ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";

pub const CORS_ALLOW_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, X-REAL";

/// `Accept` value that marks an OPTIONS request as a browser preflight
pub const PREFLIGHT_ACCEPT: &str = "*/*";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Database host used when DB_HOST is unset
pub const DEFAULT_DB_HOST: &str = "localhost";
