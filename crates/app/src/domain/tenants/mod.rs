//! Tenants

pub mod data;
pub mod errors;
pub mod lease;
pub mod records;
mod repository;
pub mod requests;
pub mod service;

pub use errors::TenantsServiceError;
pub use service::*;
