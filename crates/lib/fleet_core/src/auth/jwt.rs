//! JWT token generation and verification.
//!
//! Tokens are HS256-signed and expire one hour after issue. Issuer and
//! audience are not checked.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::warn;

use super::AuthError;
use crate::models::{Administrator, TokenClaims};

/// Access token lifetime: 1 hour.
pub const ACCESS_TOKEN_EXPIRY_SECS: i64 = 60 * 60;

/// Generate a signed access token for `administrator`, valid for one hour.
///
/// An empty `secret` yields an empty token: login still succeeds, but no
/// usable session exists.
pub fn issue_access_token(administrator: &Administrator, secret: &[u8]) -> Result<String, AuthError> {
    issue_access_token_at(administrator, secret, Utc::now())
}

/// Like [`issue_access_token`], with an explicit issue instant.
pub fn issue_access_token_at(
    administrator: &Administrator,
    secret: &[u8],
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    if secret.is_empty() {
        warn!("JWT secret is not configured; issuing empty token");
        return Ok(String::new());
    }
    let claims = TokenClaims {
        email: administrator.email.clone(),
        role: administrator.role.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ACCESS_TOKEN_EXPIRY_SECS)).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify an access token, returning the claims on success.
pub fn verify_access_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    verify_access_token_at(token, secret, Utc::now())
}

/// Like [`verify_access_token`], checking expiry against `now`.
///
/// A token is rejected once `now` reaches its `exp`; no leeway is applied.
pub fn verify_access_token_at(
    token: &str,
    secret: &[u8],
    now: DateTime<Utc>,
) -> Option<TokenClaims> {
    if secret.is_empty() || token.is_empty() {
        return None;
    }
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked below against the caller's clock.
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;

    let claims = decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)?;
    (now.timestamp() < claims.exp).then_some(claims)
}
