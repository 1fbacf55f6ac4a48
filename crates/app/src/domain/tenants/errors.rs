//! Tenants service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as SqlErrorKind},
};
use thiserror::Error;

use crate::domain::ErrorKind;

/// Tenant service error variants.
#[derive(Debug, Error)]
pub enum TenantsServiceError {
    /// Tenant already exists.
    #[error("tenant already exists")]
    AlreadyExists,

    /// Tenant was not found.
    #[error("tenant not found")]
    NotFound,

    /// The space the tenant belongs to was not found.
    #[error("space not found")]
    SpaceNotFound,

    /// Actor does not host the tenant's space.
    #[error("not authorized to manage tenants of this space")]
    Forbidden,

    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Lease end date is not after its start date.
    #[error("end date must be after start date")]
    InvalidLeaseDates,

    /// A money amount was negative.
    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),

    /// Provided data failed a storage constraint.
    #[error("invalid data")]
    InvalidData,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl TenantsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::SpaceNotFound => ErrorKind::NotFound,
            Self::Forbidden => ErrorKind::Authorization,
            Self::AlreadyExists => ErrorKind::Conflict,
            Self::MissingField(_)
            | Self::InvalidLeaseDates
            | Self::NegativeAmount(_)
            | Self::InvalidData => ErrorKind::Validation,
            Self::Sql(_) => ErrorKind::Persistence,
        }
    }

    /// Converts the error of a space lookup, where a missing row means the
    /// space rather than the tenant is absent.
    pub(crate) fn from_space_lookup(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::SpaceNotFound;
        }

        Self::from(error)
    }
}

impl From<Error> for TenantsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(SqlErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(SqlErrorKind::ForeignKeyViolation) => Self::SpaceNotFound,
            Some(SqlErrorKind::NotNullViolation) => Self::MissingField("tenant"),
            Some(SqlErrorKind::CheckViolation) => Self::InvalidData,
            Some(SqlErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
