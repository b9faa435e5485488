//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::UserStorage;
use crate::services::{AuthService, Authenticator};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Signup and login use cases
    pub auth_service: Arc<dyn AuthService>,
    /// Backing storage, pinged by the health endpoint
    pub storage: Arc<dyn UserStorage>,
}

impl AppState {
    /// Wire the default services on top of a storage backend.
    pub fn from_storage(storage: Arc<dyn UserStorage>) -> Self {
        let auth_service = Arc::new(Authenticator::new(storage.clone()));
        Self {
            auth_service,
            storage,
        }
    }
}
