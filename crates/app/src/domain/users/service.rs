//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        errors::{first_blank_field, first_blank_update},
        users::{
            data::{NewUser, UserProfileUpdate, normalize_email},
            errors::UsersServiceError,
            records::{UserRecord, UserUuid},
            repository::PgUsersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        if let Some(field) = first_blank_field([
            ("email", user.email.as_str()),
            ("password_hash", user.password_hash.as_str()),
            ("first_name", user.first_name.as_str()),
            ("last_name", user.last_name.as_str()),
        ]) {
            return Err(UsersServiceError::MissingField(field));
        }

        let user = NewUser {
            email: normalize_email(&user.email),
            ..user
        };

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_user(&mut tx, user).await?;

        tx.commit().await?;

        info!(user = %created.uuid, "registered user");

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_user_by_email(&mut tx, &normalize_email(email))
            .await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn update_profile(
        &self,
        user: UserUuid,
        update: UserProfileUpdate,
    ) -> Result<UserRecord, UsersServiceError> {
        if let Some(field) = first_blank_update([
            ("email", update.email.as_deref()),
            ("first_name", update.first_name.as_deref()),
            ("last_name", update.last_name.as_deref()),
        ]) {
            return Err(UsersServiceError::MissingField(field));
        }

        let update = UserProfileUpdate {
            email: update.email.as_deref().map(normalize_email),
            ..update
        };

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_profile(&mut tx, user, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn update_password_hash(
        &self,
        user: UserUuid,
        password_hash: String,
    ) -> Result<UserRecord, UsersServiceError> {
        if password_hash.trim().is_empty() {
            return Err(UsersServiceError::MissingField("password_hash"));
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_password_hash(&mut tx, user, &password_hash)
            .await?;

        tx.commit().await?;

        info!(user = %updated.uuid, "replaced user credential");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
/// User directory operations.
pub trait UsersService: Send + Sync {
    /// Registers a new user. The email address must not already be taken.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieves a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Looks a user up by email address, ignoring case.
    async fn find_user_by_email(&self, email: &str) -> Result<UserRecord, UsersServiceError>;

    /// Changes the supplied profile fields.
    async fn update_profile(
        &self,
        user: UserUuid,
        update: UserProfileUpdate,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Replaces the stored password credential.
    async fn update_password_hash(
        &self,
        user: UserUuid,
        password_hash: String,
    ) -> Result<UserRecord, UsersServiceError>;
}
