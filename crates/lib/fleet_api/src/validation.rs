//! Request body validation.
//!
//! Every rule is checked so the caller receives the full message list.

use fleet_core::models::vehicle::MIN_VEHICLE_YEAR;
use fleet_core::models::{NewAdministrator, Role, VehicleDraft};

use crate::models::{AdministratorRequest, ValidationErrors, VehicleRequest};

impl ValidationErrors {
    fn push(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.messages.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Validate an administrator body, producing the record to create.
pub fn validate_administrator(
    body: AdministratorRequest,
) -> Result<NewAdministrator, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if body.email.is_empty() {
        errors.push("E-mail is required");
    }
    if body.password.is_empty() {
        errors.push("Password is required");
    }
    let role = match body.role.parse::<Role>() {
        Ok(role) if role.is_assignable() => role,
        Ok(_) => {
            errors.push("Role is required");
            Role::None
        }
        Err(_) if body.role.trim().is_empty() => {
            errors.push("Role is required");
            Role::None
        }
        Err(_) => {
            errors.push("Role must be one of: Adm, Editor");
            Role::None
        }
    };

    errors.into_result(NewAdministrator::new(body.email, body.password, role))
}

/// Validate a vehicle body, producing the draft to store.
pub fn validate_vehicle(body: VehicleRequest) -> Result<VehicleDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if body.name.is_empty() {
        errors.push("Name is required");
    }
    if body.brand.is_empty() {
        errors.push("Brand is required");
    }
    if body.year < MIN_VEHICLE_YEAR {
        errors.push("Vehicle year must be greater than or equal to 1900");
    }

    errors.into_result(body.into())
}
