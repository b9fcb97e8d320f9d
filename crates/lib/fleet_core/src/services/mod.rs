//! Record services: per-entity orchestration over the store and the query
//! engine.

pub mod administrators;
pub mod vehicles;

use thiserror::Error;

use crate::store::StoreError;

/// Record service errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An administrator with the same email already exists.
    #[error("Email already registered: {0}")]
    DuplicateKey(String),

    /// The supplied record is absent or not acceptable; nothing was stored.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Store error: {0}")]
    StoreError(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey(key) => ServiceError::DuplicateKey(key),
            other => ServiceError::StoreError(other),
        }
    }
}
