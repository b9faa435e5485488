//! JSON body extractor that reports decode failures in the error-map shape.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Decodes the request body as JSON regardless of its `Content-Type`.
///
/// A malformed body is rejected with `400 {"__error__": [...]}`; field-level
/// checks are left to the service layer.
///
/// # Example
///
/// ```rust,ignore
/// use auth_api::api::extractors::JsonPayload;
/// use auth_api::domain::Credentials;
///
/// async fn signup(JsonPayload(credentials): JsonPayload<Credentials>) {
///     // credentials decoded, not yet validated
/// }
/// ```
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::bad_request(format!("cannot decode body: {}", e)))?;

        Ok(JsonPayload(value))
    }
}
