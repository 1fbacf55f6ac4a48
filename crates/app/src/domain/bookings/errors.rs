//! Bookings service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as SqlErrorKind},
};
use thiserror::Error;

use crate::domain::ErrorKind;

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    #[error("booking already exists")]
    AlreadyExists,

    #[error("booking not found")]
    NotFound,

    #[error("space not found")]
    SpaceNotFound,

    #[error("cannot book your own space")]
    OwnSpace,

    #[error("not authorized to act on this booking")]
    Forbidden,

    #[error("end date must be after start date")]
    InvalidDates,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl BookingsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::SpaceNotFound => ErrorKind::NotFound,
            Self::Forbidden => ErrorKind::Authorization,
            Self::AlreadyExists | Self::OwnSpace => ErrorKind::Conflict,
            Self::InvalidDates | Self::InvalidData => ErrorKind::Validation,
            Self::Sql(_) => ErrorKind::Persistence,
        }
    }

    pub(crate) fn from_space_lookup(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::SpaceNotFound;
        }

        Self::from(error)
    }
}

impl From<Error> for BookingsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(SqlErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(SqlErrorKind::ForeignKeyViolation) => Self::SpaceNotFound,
            Some(SqlErrorKind::CheckViolation) => Self::InvalidData,
            Some(SqlErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
