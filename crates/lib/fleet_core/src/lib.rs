//! # fleet_core
//!
//! Core domain logic for the Fleet API: administrator authentication, session
//! tokens, the query engine and the record services.

pub mod auth;
pub mod migrate;
pub mod models;
pub mod query;
pub mod services;
pub mod store;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns a greeting string with the crate version.
pub fn greeting() -> String {
    format!("Fleet API v{}", version())
}
