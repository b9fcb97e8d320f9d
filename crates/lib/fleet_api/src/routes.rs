//! Route paths, relative to the API root.

pub const HOME: &str = "/";
pub const ADMINISTRATORS_LOGIN: &str = "/administrators/login";
pub const ADMINISTRATORS: &str = "/administrators";
pub const ADMINISTRATORS_ID: &str = "/administrators/{id}";
pub const VEHICLES: &str = "/vehicles";
pub const VEHICLES_ID: &str = "/vehicles/{id}";
