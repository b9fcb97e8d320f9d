//! PostgreSQL store.
//!
//! The `administrators.email` column carries a `UNIQUE` constraint, so the
//! uniqueness check holds across processes; a unique violation on insert is
//! reported as [`StoreError::DuplicateKey`].

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use super::{AdministratorStore, FleetStore, StoreError, VehicleStore};
use crate::models::{Administrator, NewAdministrator, Role, Vehicle, VehicleDraft};
use crate::query::TextFilter;

/// Row returned by administrator queries.
#[derive(Debug, Clone, sqlx::FromRow)]
struct AdministratorRow {
    id: i32,
    email: String,
    password: String,
    role: String,
}

impl TryFrom<AdministratorRow> for Administrator {
    type Error = StoreError;

    fn try_from(row: AdministratorRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StoreError::Corrupt(format!("administrator {}: {e}", row.id)))?;
        Ok(Administrator {
            id: row.id,
            email: row.email,
            password: row.password,
            role,
        })
    }
}

/// Row returned by vehicle queries.
#[derive(Debug, Clone, sqlx::FromRow)]
struct VehicleRow {
    id: i32,
    name: String,
    brand: String,
    year: i32,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            id: row.id,
            name: row.name,
            brand: row.brand,
            year: row.year,
        }
    }
}

/// Store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AdministratorStore for PgStore {
    async fn insert_administrator(
        &self,
        administrator: NewAdministrator,
    ) -> Result<Administrator, StoreError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            INSERT INTO administrators (email, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, role
            "#,
        )
        .bind(&administrator.email)
        .bind(&administrator.password)
        .bind(administrator.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::DuplicateKey(administrator.email.clone())
            }
            other => StoreError::from(other),
        })?;
        Administrator::try_from(row)
    }

    async fn find_administrator_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Administrator>, StoreError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            "SELECT id, email, password, role FROM administrators WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Administrator::try_from).transpose()
    }

    async fn find_administrator(&self, id: i32) -> Result<Option<Administrator>, StoreError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            "SELECT id, email, password, role FROM administrators WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Administrator::try_from).transpose()
    }

    async fn enumerate_administrators(&self) -> Result<Vec<Administrator>, StoreError> {
        let rows = sqlx::query_as::<_, AdministratorRow>(
            "SELECT id, email, password, role FROM administrators ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Administrator::try_from).collect()
    }
}

#[async_trait]
impl VehicleStore for PgStore {
    async fn insert_vehicle(&self, vehicle: VehicleDraft) -> Result<Vehicle, StoreError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (name, brand, year)
            VALUES ($1, $2, $3)
            RETURNING id, name, brand, year
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(vehicle.year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn find_vehicle(&self, id: i32) -> Result<Option<Vehicle>, StoreError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "SELECT id, name, brand, year FROM vehicles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Vehicle::from))
    }

    async fn update_vehicle(
        &self,
        id: i32,
        vehicle: VehicleDraft,
    ) -> Result<Option<Vehicle>, StoreError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles
            SET name = $1, brand = $2, year = $3
            WHERE id = $4
            RETURNING id, name, brand, year
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(vehicle.year)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Vehicle::from))
    }

    async fn delete_vehicle(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn enumerate_vehicles(
        &self,
        filters: &[TextFilter],
    ) -> Result<Vec<Vehicle>, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT id, name, brand, year FROM vehicles");
        for (i, filter) in filters.iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            // strpos avoids LIKE wildcard escaping for user-supplied needles.
            query
                .push("strpos(lower(")
                .push(filter.field.column())
                .push("), lower(")
                .push_bind(filter.needle.clone())
                .push(")) > 0");
        }
        query.push(" ORDER BY id ASC");
        debug!(filters = filters.len(), "enumerating vehicles");

        let rows = query
            .build_query_as::<VehicleRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }
}

#[async_trait]
impl FleetStore for PgStore {
    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
