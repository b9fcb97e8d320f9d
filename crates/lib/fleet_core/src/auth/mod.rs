//! Authentication logic.
//!
//! Credential checks against the administrator store, and issuing and
//! verifying the signed session tokens that gate privileged routes.

pub mod credentials;
pub mod jwt;

use thiserror::Error;

use crate::store::StoreError;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email and wrong password are deliberately the same error.
    #[error("Invalid credentials")]
    CredentialError,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}
