//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as SqlErrorKind},
};
use thiserror::Error;

use crate::domain::ErrorKind;

/// User service error variants.
#[derive(Debug, Error)]
pub enum UsersServiceError {
    /// Another user already holds the email address.
    #[error("email address is already registered")]
    AlreadyExists,

    /// User was not found.
    #[error("user not found")]
    NotFound,

    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Provided data failed a storage constraint.
    #[error("invalid data")]
    InvalidData,

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl UsersServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists => ErrorKind::Conflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::MissingField(_) | Self::InvalidData => ErrorKind::Validation,
            Self::Sql(_) => ErrorKind::Persistence,
        }
    }
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(SqlErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(SqlErrorKind::NotNullViolation) => Self::MissingField("user"),
            Some(SqlErrorKind::CheckViolation) => Self::InvalidData,
            Some(SqlErrorKind::ForeignKeyViolation | SqlErrorKind::Other | _) | None => {
                Self::Sql(error)
            }
        }
    }
}
