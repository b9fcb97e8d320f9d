//! Request and response bodies.

use fleet_core::models::{Administrator, Role, VehicleDraft};
use serde::{Deserialize, Serialize};

/// `POST /administrators/login` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login. `token` is empty when no signing key is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// `POST /administrators` body. The role is free text validated against the
/// closed role set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdministratorRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Administrator as exposed over HTTP (no password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministratorResponse {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl From<Administrator> for AdministratorResponse {
    fn from(a: Administrator) -> Self {
        Self {
            id: a.id,
            email: a.email,
            role: a.role,
        }
    }
}

/// `POST /vehicles` and `PUT /vehicles/{id}` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRequest {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl From<VehicleRequest> for VehicleDraft {
    fn from(r: VehicleRequest) -> Self {
        VehicleDraft::new(r.name, r.brand, r.year)
    }
}

/// Query string of listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub name: Option<String>,
    pub brand: Option<String>,
}

/// Field-level validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

/// Error body for non-validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub greeting: String,
    pub store_connected: bool,
}
