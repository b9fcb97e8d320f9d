//! Request handlers.

pub mod administrators;
pub mod home;
pub mod vehicles;
