//! Spacelet Domain Concerns

pub mod bookings;
pub mod errors;
pub mod requests;
pub mod spaces;
pub mod tenants;
pub mod users;

pub use errors::ErrorKind;
