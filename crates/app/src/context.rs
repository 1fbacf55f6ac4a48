//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        bookings::{BookingsService, PgBookingsService},
        spaces::{PgSpacesService, SpacesService},
        tenants::{PgTenantsService, TenantsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Every domain service behind its trait, ready to hand to an outer layer.
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub spaces: Arc<dyn SpacesService>,
    pub tenants: Arc<dyn TenantsService>,
    pub bookings: Arc<dyn BookingsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            users: Arc::new(PgUsersService::new(db.clone())),
            spaces: Arc::new(PgSpacesService::new(db.clone())),
            tenants: Arc::new(PgTenantsService::new(db.clone())),
            bookings: Arc::new(PgBookingsService::new(db.clone())),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::new(&Db::new(pool)))
    }
}
