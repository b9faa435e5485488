//! CORS headers and preflight handling.

use axum::{
    extract::Request,
    http::{
        header::{
            ACCEPT, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, PREFLIGHT_ACCEPT};

/// A browser preflight: OPTIONS sent with `Accept: */*`
fn is_preflight(request: &Request) -> bool {
    request.method() == Method::OPTIONS
        && request
            .headers()
            .get(ACCEPT)
            .and_then(|h| h.to_str().ok())
            == Some(PREFLIGHT_ACCEPT)
}

/// CORS middleware.
///
/// Echoes the request `Origin` back when one is sent. Preflight requests are
/// answered here with headers only and never reach the handler.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let origin = request.headers().get(ORIGIN).cloned();

    let mut response = if is_preflight(&request) {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    if let Some(origin) = origin {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        );
        headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
    }

    response
}
