//! Access guard: Bearer token extraction and JWT verification.
//!
//! Authentication only: any valid token reaches every protected route. The
//! role claim is carried for handlers and audit logs, not checked here.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::AppState;
use crate::error::AppError;
use crate::services::auth::{TokenClaims, verify_access_token};

/// Verified claims, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdministrator(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the JWT,
/// and injects `AuthenticatedAdministrator` into request extensions.
///
/// Any failure short-circuits with a bare 401 before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = bearer_token(header).ok_or(AppError::Unauthorized)?;

    let claims = verify_access_token(token, state.config.jwt_secret.as_bytes())
        .ok_or_else(|| {
            debug!(path = %request.uri().path(), "rejected bearer token");
            AppError::Unauthorized
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedAdministrator(claims));

    Ok(next.run(request).await)
}

/// Token of a `Bearer` credential. The scheme name is case-insensitive.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim_start().split_once(' ')?;
    scheme.eq_ignore_ascii_case("Bearer").then(|| token.trim())
}
