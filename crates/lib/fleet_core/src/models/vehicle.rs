//! Vehicle domain models.

use serde::{Deserialize, Serialize};

/// Earliest accepted manufacture year.
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Persisted vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

/// Vehicle fields without an identifier, used for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl VehicleDraft {
    pub fn new(name: impl Into<String>, brand: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            year,
        }
    }

    /// An absent vehicle: no field carries a value.
    pub fn is_absent(&self) -> bool {
        self.name.is_empty() && self.brand.is_empty() && self.year == 0
    }
}

impl Vehicle {
    /// Replaces every mutable field with the draft's values.
    pub fn apply(&mut self, draft: VehicleDraft) {
        self.name = draft.name;
        self.brand = draft.brand;
        self.year = draft.year;
    }
}
