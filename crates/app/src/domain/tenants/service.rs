//! Tenants service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::{
    database::Db,
    domain::{
        errors::{first_blank_field, first_blank_update},
        spaces::{
            records::{SpaceRecord, SpaceUuid},
            repository::PgSpacesRepository,
        },
        tenants::{
            data::{NewTenant, TenantUpdate},
            errors::TenantsServiceError,
            lease::{
                HOST_VIEW_ENDING_SOON_DAYS, LeaseStanding, METRICS_ENDING_SOON_DAYS,
                SPACE_VIEW_ENDING_SOON_DAYS,
            },
            records::{TenantListingRecord, TenantMetricsRecord, TenantRecord, TenantUuid},
            repository::{PgTenantsRepository, TenantWithSpaceRow},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgTenantsService {
    db: Db,
    repository: PgTenantsRepository,
    spaces_repository: PgSpacesRepository,
}

impl PgTenantsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTenantsRepository::new(),
            spaces_repository: PgSpacesRepository::new(),
        }
    }
}

fn validate_lease_dates(start_date: Date, end_date: Date) -> Result<(), TenantsServiceError> {
    if end_date <= start_date {
        return Err(TenantsServiceError::InvalidLeaseDates);
    }

    Ok(())
}

fn validate_amounts<'a>(
    amounts: impl IntoIterator<Item = (&'static str, Option<&'a Decimal>)>,
) -> Result<(), TenantsServiceError> {
    for (field, amount) in amounts {
        if amount.is_some_and(Decimal::is_sign_negative) {
            return Err(TenantsServiceError::NegativeAmount(field));
        }
    }

    Ok(())
}

fn authorize(space: &SpaceRecord, host: UserUuid) -> Result<(), TenantsServiceError> {
    if space.is_hosted_by(host) {
        Ok(())
    } else {
        Err(TenantsServiceError::Forbidden)
    }
}

fn listing(row: TenantWithSpaceRow, today: Date, window_days: i64) -> TenantListingRecord {
    let standing = LeaseStanding::of(&row.tenant, today, window_days);

    TenantListingRecord {
        tenant: row.tenant,
        space_title: row.space_title,
        standing,
    }
}

impl PgTenantsService {
    /// Loads a live tenant and checks that `host` hosts its space.
    async fn authorized_tenant(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tenant: TenantUuid,
        host: UserUuid,
    ) -> Result<TenantRecord, TenantsServiceError> {
        let tenant = self.repository.get_tenant(tx, tenant).await?;

        let space = self
            .spaces_repository
            .get_space(tx, tenant.space_uuid)
            .await
            .map_err(TenantsServiceError::from_space_lookup)?;

        authorize(&space, host)?;

        Ok(tenant)
    }
}

#[async_trait]
impl TenantsService for PgTenantsService {
    #[instrument(skip(self, tenant), fields(tenant = %tenant.uuid, space = %tenant.space_uuid))]
    async fn create_tenant(
        &self,
        host: UserUuid,
        tenant: NewTenant,
    ) -> Result<TenantRecord, TenantsServiceError> {
        if let Some(field) = first_blank_field([
            ("first_name", tenant.first_name.as_str()),
            ("last_name", tenant.last_name.as_str()),
            ("email", tenant.email.as_str()),
        ]) {
            return Err(TenantsServiceError::MissingField(field));
        }

        let mut tx = self.db.begin().await?;

        let space = self
            .spaces_repository
            .get_space(&mut tx, tenant.space_uuid)
            .await
            .map_err(TenantsServiceError::from_space_lookup)?;

        authorize(&space, host)?;

        validate_lease_dates(tenant.start_date, tenant.end_date)?;
        validate_amounts([
            ("rent_amount", tenant.rent_amount.as_ref()),
            ("security_deposit", tenant.security_deposit.as_ref()),
        ])?;

        let created = self.repository.create_tenant(&mut tx, tenant).await?;

        tx.commit().await?;

        info!("tenant added");

        Ok(created)
    }

    async fn get_tenant(
        &self,
        tenant: TenantUuid,
        host: UserUuid,
    ) -> Result<TenantRecord, TenantsServiceError> {
        let mut tx = self.db.begin().await?;

        let tenant = self.authorized_tenant(&mut tx, tenant, host).await?;

        tx.commit().await?;

        Ok(tenant)
    }

    #[instrument(skip(self, update))]
    async fn update_tenant(
        &self,
        tenant: TenantUuid,
        host: UserUuid,
        update: TenantUpdate,
    ) -> Result<TenantRecord, TenantsServiceError> {
        if let Some(field) = first_blank_update([
            ("first_name", update.first_name.as_deref()),
            ("last_name", update.last_name.as_deref()),
            ("email", update.email.as_deref()),
        ]) {
            return Err(TenantsServiceError::MissingField(field));
        }

        validate_amounts([
            ("rent_amount", update.rent_amount.as_ref()),
            ("security_deposit", update.security_deposit.as_ref()),
        ])?;

        let mut tx = self.db.begin().await?;

        let existing = self.authorized_tenant(&mut tx, tenant, host).await?;

        validate_lease_dates(
            update.start_date.unwrap_or(existing.start_date),
            update.end_date.unwrap_or(existing.end_date),
        )?;

        let updated = self.repository.update_tenant(&mut tx, tenant, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_tenant(
        &self,
        tenant: TenantUuid,
        host: UserUuid,
    ) -> Result<TenantRecord, TenantsServiceError> {
        let mut tx = self.db.begin().await?;

        self.authorized_tenant(&mut tx, tenant, host).await?;

        let deleted = self.repository.soft_delete_tenant(&mut tx, tenant).await?;

        tx.commit().await?;

        info!("tenant removed");

        Ok(deleted)
    }

    async fn list_host_tenants(
        &self,
        host: UserUuid,
        today: Date,
    ) -> Result<Vec<TenantListingRecord>, TenantsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.list_host_tenants(&mut tx, host).await?;

        tx.commit().await?;

        Ok(rows
            .into_iter()
            .map(|row| listing(row, today, HOST_VIEW_ENDING_SOON_DAYS))
            .collect())
    }

    async fn list_space_tenants(
        &self,
        space: SpaceUuid,
        host: UserUuid,
        today: Date,
    ) -> Result<Vec<TenantListingRecord>, TenantsServiceError> {
        let mut tx = self.db.begin().await?;

        let space = self
            .spaces_repository
            .get_space(&mut tx, space)
            .await
            .map_err(TenantsServiceError::from_space_lookup)?;

        authorize(&space, host)?;

        let rows = self.repository.list_space_tenants(&mut tx, space.uuid).await?;

        tx.commit().await?;

        Ok(rows
            .into_iter()
            .map(|row| listing(row, today, SPACE_VIEW_ENDING_SOON_DAYS))
            .collect())
    }

    async fn tenant_metrics(
        &self,
        host: UserUuid,
        today: Date,
    ) -> Result<TenantMetricsRecord, TenantsServiceError> {
        let mut tx = self.db.begin().await?;

        let metrics = self
            .repository
            .tenant_metrics(&mut tx, host, today, METRICS_ENDING_SOON_DAYS)
            .await?;

        tx.commit().await?;

        Ok(metrics)
    }
}

#[automock]
#[async_trait]
/// Tenant (lease record) operations. Rights over a tenant belong to the host
/// of the tenant's space.
pub trait TenantsService: Send + Sync {
    /// Adds an active tenant to one of the host's spaces.
    async fn create_tenant(
        &self,
        host: UserUuid,
        tenant: NewTenant,
    ) -> Result<TenantRecord, TenantsServiceError>;

    /// Retrieves a live tenant.
    async fn get_tenant(
        &self,
        tenant: TenantUuid,
        host: UserUuid,
    ) -> Result<TenantRecord, TenantsServiceError>;

    /// Applies a partial update. The resulting lease window must stay valid.
    async fn update_tenant(
        &self,
        tenant: TenantUuid,
        host: UserUuid,
        update: TenantUpdate,
    ) -> Result<TenantRecord, TenantsServiceError>;

    /// Soft-deletes a tenant and returns the deleted record.
    async fn delete_tenant(
        &self,
        tenant: TenantUuid,
        host: UserUuid,
    ) -> Result<TenantRecord, TenantsServiceError>;

    /// Lists live tenants across all of the host's spaces.
    async fn list_host_tenants(
        &self,
        host: UserUuid,
        today: Date,
    ) -> Result<Vec<TenantListingRecord>, TenantsServiceError>;

    /// Lists live tenants of one of the host's spaces.
    async fn list_space_tenants(
        &self,
        space: SpaceUuid,
        host: UserUuid,
        today: Date,
    ) -> Result<Vec<TenantListingRecord>, TenantsServiceError>;

    /// Aggregates lease figures over the host's tenants as of `today`.
    async fn tenant_metrics(
        &self,
        host: UserUuid,
        today: Date,
    ) -> Result<TenantMetricsRecord, TenantsServiceError>;
}
