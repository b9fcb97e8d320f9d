//! In-memory store.
//!
//! Records live in `BTreeMap`s keyed by identifier so enumeration is always in
//! insertion order. Used by tests and by the server's `--in-memory` mode.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AdministratorStore, FleetStore, StoreError, VehicleStore};
use crate::models::administrator::default_administrator;
use crate::models::{Administrator, NewAdministrator, Vehicle, VehicleDraft};
use crate::query::TextFilter;

#[derive(Debug, Default)]
struct Tables {
    administrators: BTreeMap<i32, Administrator>,
    vehicles: BTreeMap<i32, Vehicle>,
    next_administrator_id: i32,
    next_vehicle_id: i32,
}

impl Tables {
    fn next_administrator_id(&mut self) -> i32 {
        self.next_administrator_id += 1;
        self.next_administrator_id
    }

    fn next_vehicle_id(&mut self) -> i32 {
        self.next_vehicle_id += 1;
        self.next_vehicle_id
    }
}

/// Process-local store. Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store containing only the default administrator.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        let id = tables.next_administrator_id();
        let seed = default_administrator();
        tables.administrators.insert(
            id,
            Administrator {
                id,
                email: seed.email,
                password: seed.password,
                role: seed.role,
            },
        );
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Number of stored vehicles.
    pub async fn vehicle_count(&self) -> usize {
        self.tables.read().await.vehicles.len()
    }

    /// Number of stored administrators.
    pub async fn administrator_count(&self) -> usize {
        self.tables.read().await.administrators.len()
    }
}

#[async_trait]
impl AdministratorStore for MemoryStore {
    async fn insert_administrator(
        &self,
        administrator: NewAdministrator,
    ) -> Result<Administrator, StoreError> {
        let mut tables = self.tables.write().await;
        // Checked under the write lock, so the email index stays unique.
        if tables
            .administrators
            .values()
            .any(|a| a.email == administrator.email)
        {
            return Err(StoreError::DuplicateKey(administrator.email));
        }
        let id = tables.next_administrator_id();
        let record = Administrator {
            id,
            email: administrator.email,
            password: administrator.password,
            role: administrator.role,
        };
        tables.administrators.insert(id, record.clone());
        Ok(record)
    }

    async fn find_administrator_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Administrator>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .administrators
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_administrator(&self, id: i32) -> Result<Option<Administrator>, StoreError> {
        Ok(self.tables.read().await.administrators.get(&id).cloned())
    }

    async fn enumerate_administrators(&self) -> Result<Vec<Administrator>, StoreError> {
        Ok(self
            .tables
            .read()
            .await
            .administrators
            .values()
            .cloned()
            .collect())
    }
}

#[async_trait]
impl VehicleStore for MemoryStore {
    async fn insert_vehicle(&self, vehicle: VehicleDraft) -> Result<Vehicle, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_vehicle_id();
        let record = Vehicle {
            id,
            name: vehicle.name,
            brand: vehicle.brand,
            year: vehicle.year,
        };
        tables.vehicles.insert(id, record.clone());
        Ok(record)
    }

    async fn find_vehicle(&self, id: i32) -> Result<Option<Vehicle>, StoreError> {
        Ok(self.tables.read().await.vehicles.get(&id).cloned())
    }

    async fn update_vehicle(
        &self,
        id: i32,
        vehicle: VehicleDraft,
    ) -> Result<Option<Vehicle>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.vehicles.get_mut(&id).map(|existing| {
            existing.apply(vehicle);
            existing.clone()
        }))
    }

    async fn delete_vehicle(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.vehicles.remove(&id).is_some())
    }

    async fn enumerate_vehicles(
        &self,
        filters: &[TextFilter],
    ) -> Result<Vec<Vehicle>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .vehicles
            .values()
            .filter(|v| filters.iter().all(|f| f.matches(v)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FleetStore for MemoryStore {
    async fn ping(&self) -> bool {
        true
    }
}
