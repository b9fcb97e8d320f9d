//! Login flow: credential check plus token issue, delegating to
//! `fleet_core::auth`.

use fleet_core::auth::{credentials, jwt};
use fleet_core::store::AdministratorStore;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::models::LoginResponse;

// Re-export from fleet_core for the middleware.
pub use fleet_core::auth::jwt::verify_access_token;
pub use fleet_core::models::TokenClaims;

/// Authenticate with email + password and mint a session token.
///
/// With no signing key configured the login still succeeds, but the response
/// carries an empty token.
pub async fn login<S>(
    store: &S,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse>
where
    S: AdministratorStore + ?Sized,
{
    let administrator = credentials::login(store, email, password).await?;
    let token = jwt::issue_access_token(&administrator, jwt_secret)?;
    if token.is_empty() {
        warn!(id = administrator.id, "login succeeded without a usable session token");
    } else {
        info!(id = administrator.id, role = %administrator.role, "administrator logged in");
    }
    Ok(LoginResponse {
        email: administrator.email,
        role: administrator.role,
        token,
    })
}
