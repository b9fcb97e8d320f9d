//! Credential verification.
//!
//! Passwords are stored and compared as plaintext. This is a known security
//! defect kept for compatibility with the existing data layout.

use tracing::debug;

use super::AuthError;
use crate::models::Administrator;
use crate::store::AdministratorStore;

/// Returns the administrator whose email and password both match exactly.
pub async fn login<S>(store: &S, email: &str, password: &str) -> Result<Administrator, AuthError>
where
    S: AdministratorStore + ?Sized,
{
    let administrator = store.find_administrator_by_email(email).await?;
    match administrator {
        Some(a) if a.password == password => Ok(a),
        _ => {
            debug!("login rejected");
            Err(AuthError::CredentialError)
        }
    }
}
