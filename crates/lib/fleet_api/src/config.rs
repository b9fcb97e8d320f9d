//! API server configuration.

use fleet_core::query::PageBounds;
use tracing::warn;

/// Default listener address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3100";
/// Default PostgreSQL connection URL.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/fleet";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret. Empty means tokens cannot be issued or verified.
    pub jwt_secret: String,
    /// Treatment of out-of-range page parameters on listing endpoints.
    pub page_bounds: PageBounds,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable            | Default                             |
    /// |---------------------|-------------------------------------|
    /// | `BIND_ADDR`         | `127.0.0.1:3100`                    |
    /// | `DATABASE_URL`      | `postgres://localhost:5432/fleet`   |
    /// | `JWT_SECRET`        | empty (login yields an empty token) |
    /// | `FLEET_PAGE_BOUNDS` | `pass-through`                      |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            pg_connection_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            jwt_secret: resolve_jwt_secret(lookup("JWT_SECRET")),
            page_bounds: resolve_page_bounds(lookup("FLEET_PAGE_BOUNDS")),
        }
    }
}

/// A missing key is not an error: logins succeed but carry an empty token.
fn resolve_jwt_secret(value: Option<String>) -> String {
    let secret = value.unwrap_or_default();
    if secret.is_empty() {
        warn!("JWT_SECRET is not set; issued tokens will be empty");
    }
    secret
}

fn resolve_page_bounds(value: Option<String>) -> PageBounds {
    match value {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("{e}; using pass-through");
            PageBounds::PassThrough
        }),
        None => PageBounds::default(),
    }
}
