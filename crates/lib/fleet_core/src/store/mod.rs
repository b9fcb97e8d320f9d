//! Persistent store interface.
//!
//! Record services talk to storage only through these traits, so any engine
//! that can enumerate records in a stable order is substitutable.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Administrator, NewAdministrator, Vehicle, VehicleDraft};
use crate::query::TextFilter;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Administrator collection.
#[async_trait]
pub trait AdministratorStore: Send + Sync {
    /// Persists a new administrator and assigns its identifier.
    async fn insert_administrator(
        &self,
        administrator: NewAdministrator,
    ) -> Result<Administrator, StoreError>;

    /// Exact, case-sensitive email lookup.
    async fn find_administrator_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Administrator>, StoreError>;

    async fn find_administrator(&self, id: i32) -> Result<Option<Administrator>, StoreError>;

    /// All administrators in ascending identifier order.
    async fn enumerate_administrators(&self) -> Result<Vec<Administrator>, StoreError>;
}

/// Vehicle collection.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn insert_vehicle(&self, vehicle: VehicleDraft) -> Result<Vehicle, StoreError>;

    async fn find_vehicle(&self, id: i32) -> Result<Option<Vehicle>, StoreError>;

    /// Replaces the mutable fields. Returns `None` when the id is unknown.
    async fn update_vehicle(
        &self,
        id: i32,
        vehicle: VehicleDraft,
    ) -> Result<Option<Vehicle>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete_vehicle(&self, id: i32) -> Result<bool, StoreError>;

    /// Vehicles matching every filter, in ascending identifier order.
    async fn enumerate_vehicles(&self, filters: &[TextFilter])
    -> Result<Vec<Vehicle>, StoreError>;
}

/// The full store collaborator.
#[async_trait]
pub trait FleetStore: AdministratorStore + VehicleStore {
    /// Whether the backing storage is reachable.
    async fn ping(&self) -> bool;
}
