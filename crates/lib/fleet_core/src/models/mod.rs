//! Domain models.

pub mod administrator;
pub mod token;
pub mod vehicle;

pub use administrator::{Administrator, NewAdministrator, Role};
pub use token::TokenClaims;
pub use vehicle::{Vehicle, VehicleDraft};
