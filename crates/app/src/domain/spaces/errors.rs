//! Spaces service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as SqlErrorKind},
};
use thiserror::Error;

use crate::domain::ErrorKind;

#[derive(Debug, Error)]
pub enum SpacesServiceError {
    #[error("space already exists")]
    AlreadyExists,

    #[error("space not found")]
    NotFound,

    #[error("not authorized to manage this space")]
    Forbidden,

    #[error("space has {count} active tenant(s) and cannot be deleted")]
    ActiveTenants { count: u64 },

    #[error("host does not exist")]
    InvalidReference,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("capacity must be a positive whole number")]
    InvalidCapacity,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl SpacesServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::InvalidReference => ErrorKind::NotFound,
            Self::Forbidden => ErrorKind::Authorization,
            Self::AlreadyExists | Self::ActiveTenants { .. } => ErrorKind::Conflict,
            Self::MissingField(_) | Self::InvalidCapacity | Self::InvalidData => {
                ErrorKind::Validation
            }
            Self::Sql(_) => ErrorKind::Persistence,
        }
    }
}

impl From<Error> for SpacesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(SqlErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(SqlErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(SqlErrorKind::NotNullViolation) => Self::MissingField("space"),
            Some(SqlErrorKind::CheckViolation) => Self::InvalidData,
            Some(SqlErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<TryFromIntError> for SpacesServiceError {
    fn from(_: TryFromIntError) -> Self {
        Self::InvalidCapacity
    }
}
