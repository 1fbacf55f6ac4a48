//! Tenants Repository

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    spaces::{records::SpaceUuid, repository::count_from_db},
    tenants::{
        data::{NewTenant, TenantUpdate},
        records::{TenantMetricsRecord, TenantRecord, TenantStatus, TenantUuid},
    },
    users::records::UserUuid,
};

const CREATE_TENANT_SQL: &str = include_str!("sql/create_tenant.sql");
const GET_TENANT_SQL: &str = include_str!("sql/get_tenant.sql");
const UPDATE_TENANT_SQL: &str = include_str!("sql/update_tenant.sql");
const SOFT_DELETE_TENANT_SQL: &str = include_str!("sql/soft_delete_tenant.sql");
const LIST_HOST_TENANTS_SQL: &str = include_str!("sql/list_host_tenants.sql");
const LIST_SPACE_TENANTS_SQL: &str = include_str!("sql/list_space_tenants.sql");
const TENANT_METRICS_SQL: &str = include_str!("sql/tenant_metrics.sql");

/// Tenant row joined with the title of its space.
#[derive(Debug, Clone)]
pub(crate) struct TenantWithSpaceRow {
    pub(crate) tenant: TenantRecord,
    pub(crate) space_title: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTenantsRepository;

impl PgTenantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts an active tenant. Absent money amounts are stored as zero.
    pub(crate) async fn create_tenant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: NewTenant,
    ) -> Result<TenantRecord, sqlx::Error> {
        query_as::<Postgres, TenantRecord>(CREATE_TENANT_SQL)
            .bind(tenant.uuid.into_uuid())
            .bind(tenant.space_uuid.into_uuid())
            .bind(tenant.first_name)
            .bind(tenant.last_name)
            .bind(tenant.email)
            .bind(tenant.phone_number)
            .bind(SqlxDate::from(tenant.start_date))
            .bind(SqlxDate::from(tenant.end_date))
            .bind(tenant.rent_amount.unwrap_or(Decimal::ZERO))
            .bind(tenant.security_deposit.unwrap_or(Decimal::ZERO))
            .bind(tenant.notes)
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetches a tenant that has not been soft-deleted.
    pub(crate) async fn get_tenant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
    ) -> Result<TenantRecord, sqlx::Error> {
        query_as::<Postgres, TenantRecord>(GET_TENANT_SQL)
            .bind(tenant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_tenant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
        update: TenantUpdate,
    ) -> Result<TenantRecord, sqlx::Error> {
        query_as::<Postgres, TenantRecord>(UPDATE_TENANT_SQL)
            .bind(tenant.into_uuid())
            .bind(update.first_name)
            .bind(update.last_name)
            .bind(update.email)
            .bind(update.phone_number)
            .bind(update.start_date.map(SqlxDate::from))
            .bind(update.end_date.map(SqlxDate::from))
            .bind(update.rent_amount)
            .bind(update.security_deposit)
            .bind(update.notes)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn soft_delete_tenant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
    ) -> Result<TenantRecord, sqlx::Error> {
        query_as::<Postgres, TenantRecord>(SOFT_DELETE_TENANT_SQL)
            .bind(tenant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_host_tenants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        host: UserUuid,
    ) -> Result<Vec<TenantWithSpaceRow>, sqlx::Error> {
        query_as::<Postgres, TenantWithSpaceRow>(LIST_HOST_TENANTS_SQL)
            .bind(host.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_space_tenants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
    ) -> Result<Vec<TenantWithSpaceRow>, sqlx::Error> {
        query_as::<Postgres, TenantWithSpaceRow>(LIST_SPACE_TENANTS_SQL)
            .bind(space.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn tenant_metrics(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        host: UserUuid,
        today: Date,
        ending_soon_days: i32,
    ) -> Result<TenantMetricsRecord, sqlx::Error> {
        query_as::<Postgres, TenantMetricsRecord>(TENANT_METRICS_SQL)
            .bind(host.into_uuid())
            .bind(SqlxDate::from(today))
            .bind(ending_soon_days)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TenantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<TenantStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: TenantUuid::from_uuid(row.try_get("tenant_id")?),
            space_uuid: SpaceUuid::from_uuid(row.try_get("space_id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            start_date: row.try_get::<SqlxDate, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxDate, _>("end_date")?.to_jiff(),
            rent_amount: row.try_get("rent_amount")?,
            security_deposit: row.try_get("security_deposit")?,
            notes: row.try_get("notes")?,
            status,
            is_deleted: row.try_get("is_deleted")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TenantWithSpaceRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            tenant: TenantRecord::from_row(row)?,
            space_title: row.try_get("space_title")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TenantMetricsRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            total_tenants: count_from_db("total_tenants", row.try_get("total_tenants")?)?,
            active_tenants: count_from_db("active_tenants", row.try_get("active_tenants")?)?,
            monthly_rent: row.try_get("monthly_rent")?,
            leases_ending_soon: count_from_db(
                "leases_ending_soon",
                row.try_get("leases_ending_soon")?,
            )?,
        })
    }
}
