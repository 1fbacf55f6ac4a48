//! User Data

use crate::domain::users::records::UserUuid;

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// User Profile Update Data
///
/// Only supplied fields are changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Canonical form an email address is stored and compared in.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
