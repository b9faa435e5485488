//! Signup and login handlers.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::JsonPayload;
use crate::api::AppState;
use crate::config::{FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION, MAX_FIELD_LENGTH};
use crate::domain::{Credentials, User};
use crate::errors::AppResult;

/// Body returned after a successful signup
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    /// Identifier assigned to the new user
    #[schema(example = 42)]
    pub id: i32,
}

/// One field of an OPTIONS form description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: &'static str,
    #[serde(rename = "maxLength")]
    pub max_length: String,
}

impl FieldSchema {
    fn required(kind: &'static str) -> Self {
        Self {
            kind,
            required: "1",
            max_length: MAX_FIELD_LENGTH.to_string(),
        }
    }
}

/// Static description of the fields a form must submit
pub type FormSchema = BTreeMap<&'static str, FieldSchema>;

/// Fields expected by `POST /signup`.
///
/// `password2` is advertised for client-side confirmation; the server does
/// not compare it.
pub fn signup_form_schema() -> FormSchema {
    BTreeMap::from([
        (FIELD_EMAIL, FieldSchema::required("string")),
        (FIELD_PASSWORD, FieldSchema::required("password")),
        (FIELD_PASSWORD_CONFIRMATION, FieldSchema::required("password")),
    ])
}

/// Fields expected by `POST /login`
pub fn login_form_schema() -> FormSchema {
    BTreeMap::from([
        (FIELD_EMAIL, FieldSchema::required("string")),
        (FIELD_PASSWORD, FieldSchema::required("password")),
    ])
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup).options(signup_options))
        .route("/login", post(login).options(login_options))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 201, description = "User registered", body = SignupResponse),
        (status = 400, description = "Validation failed or email taken", body = crate::domain::ValidationErrors),
        (status = 500, description = "User could not be stored; a storage fault, deliberately reported as 500 and not 400", body = crate::domain::ValidationErrors)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    JsonPayload(credentials): JsonPayload<Credentials>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let id = state.auth_service.signup(credentials).await?;

    Ok((StatusCode::CREATED, Json(SignupResponse { id })))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 200, description = "Credentials accepted", body = User),
        (status = 400, description = "Validation failed or credentials rejected", body = crate::domain::ValidationErrors)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonPayload(credentials): JsonPayload<Credentials>,
) -> AppResult<Json<User>> {
    let user = state.auth_service.login(credentials).await?;

    Ok(Json(user))
}

async fn signup_options() -> Json<FormSchema> {
    Json(signup_form_schema())
}

async fn login_options() -> Json<FormSchema> {
    Json(login_form_schema())
}
