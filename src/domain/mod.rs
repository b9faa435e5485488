//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod user;
pub mod validation;

pub use user::{Credentials, User};
pub use validation::{FieldCheck, ValidationErrors};
