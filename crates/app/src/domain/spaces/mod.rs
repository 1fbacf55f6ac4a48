//! Spaces

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod requests;
pub mod service;

pub use errors::SpacesServiceError;
pub use service::*;
