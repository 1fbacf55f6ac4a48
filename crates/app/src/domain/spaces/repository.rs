//! Spaces Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    spaces::{
        data::{NewSpace, SpaceFilter, SpaceUpdate},
        records::{SpaceMetricsRecord, SpaceRecord, SpaceSummaryRecord, SpaceUuid},
    },
    users::records::UserUuid,
};

const CREATE_SPACE_SQL: &str = include_str!("sql/create_space.sql");
const GET_SPACE_SQL: &str = include_str!("sql/get_space.sql");
const LOCK_SPACE_SQL: &str = include_str!("sql/lock_space.sql");
const GET_SPACE_HOST_SQL: &str = include_str!("sql/get_space_host.sql");
const LIST_HOST_SPACES_SQL: &str = include_str!("sql/list_host_spaces.sql");
const BROWSE_SPACES_SQL: &str = include_str!("sql/browse_spaces.sql");
const UPDATE_SPACE_SQL: &str = include_str!("sql/update_space.sql");
const COUNT_ACTIVE_TENANTS_SQL: &str = include_str!("sql/count_active_tenants.sql");
const SOFT_DELETE_SPACE_TENANTS_SQL: &str = include_str!("sql/soft_delete_space_tenants.sql");
const SOFT_DELETE_SPACE_SQL: &str = include_str!("sql/soft_delete_space.sql");
const SPACE_METRICS_SQL: &str = include_str!("sql/space_metrics.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSpacesRepository;

impl PgSpacesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        host: UserUuid,
        space: NewSpace,
    ) -> Result<SpaceRecord, sqlx::Error> {
        query_as::<Postgres, SpaceRecord>(CREATE_SPACE_SQL)
            .bind(space.uuid.into_uuid())
            .bind(host.into_uuid())
            .bind(space.title)
            .bind(space.description)
            .bind(space.space_type)
            .bind(capacity_to_db(space.capacity)?)
            .bind(space.street_address)
            .bind(space.city)
            .bind(space.state)
            .bind(space.zip_code)
            .bind(space.country)
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetches a space that has not been soft-deleted.
    pub(crate) async fn get_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
    ) -> Result<SpaceRecord, sqlx::Error> {
        query_as::<Postgres, SpaceRecord>(GET_SPACE_SQL)
            .bind(space.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetches a live space and holds its row lock until the transaction ends.
    ///
    /// Tenant inserts take a key-share lock on the space through the foreign
    /// key, so a tenant still being written blocks this until it commits.
    pub(crate) async fn lock_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
    ) -> Result<SpaceRecord, sqlx::Error> {
        query_as::<Postgres, SpaceRecord>(LOCK_SPACE_SQL)
            .bind(space.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetches the host of a space, deleted or not.
    pub(crate) async fn get_space_host(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
    ) -> Result<UserUuid, sqlx::Error> {
        query_scalar::<Postgres, Uuid>(GET_SPACE_HOST_SQL)
            .bind(space.into_uuid())
            .fetch_one(&mut **tx)
            .await
            .map(UserUuid::from_uuid)
    }

    pub(crate) async fn list_host_spaces(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        host: UserUuid,
    ) -> Result<Vec<SpaceSummaryRecord>, sqlx::Error> {
        query_as::<Postgres, SpaceSummaryRecord>(LIST_HOST_SPACES_SQL)
            .bind(host.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn browse_spaces(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: SpaceFilter,
    ) -> Result<Vec<SpaceRecord>, sqlx::Error> {
        query_as::<Postgres, SpaceRecord>(BROWSE_SPACES_SQL)
            .bind(filter.city)
            .bind(filter.space_type)
            .bind(filter.min_capacity.map(capacity_to_db).transpose()?)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
        update: SpaceUpdate,
    ) -> Result<SpaceRecord, sqlx::Error> {
        query_as::<Postgres, SpaceRecord>(UPDATE_SPACE_SQL)
            .bind(space.into_uuid())
            .bind(update.title)
            .bind(update.description)
            .bind(update.space_type)
            .bind(update.capacity.map(capacity_to_db).transpose()?)
            .bind(update.street_address)
            .bind(update.city)
            .bind(update.state)
            .bind(update.zip_code)
            .bind(update.country)
            .bind(update.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    /// Counts tenants that still hold an active, non-deleted lease on the space.
    pub(crate) async fn count_active_tenants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
    ) -> Result<u64, sqlx::Error> {
        let count = query_scalar::<Postgres, i64>(COUNT_ACTIVE_TENANTS_SQL)
            .bind(space.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        count_from_db("count", count)
    }

    /// Marks every tenant of the space deleted. Returns the number of rows touched.
    pub(crate) async fn soft_delete_space_tenants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SOFT_DELETE_SPACE_TENANTS_SQL)
            .bind(space.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn soft_delete_space(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        space: SpaceUuid,
    ) -> Result<SpaceRecord, sqlx::Error> {
        query_as::<Postgres, SpaceRecord>(SOFT_DELETE_SPACE_SQL)
            .bind(space.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn space_metrics(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        host: UserUuid,
    ) -> Result<SpaceMetricsRecord, sqlx::Error> {
        query_as::<Postgres, SpaceMetricsRecord>(SPACE_METRICS_SQL)
            .bind(host.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

fn capacity_to_db(capacity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(capacity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "capacity".to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn count_from_db(column: &str, count: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for SpaceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let capacity_i32: i32 = row.try_get("capacity")?;

        let capacity = u32::try_from(capacity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "capacity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: SpaceUuid::from_uuid(row.try_get("space_id")?),
            host_uuid: UserUuid::from_uuid(row.try_get("host_id")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            space_type: row.try_get("space_type")?,
            capacity,
            street_address: row.try_get("street_address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
            country: row.try_get("country")?,
            is_active: row.try_get("is_active")?,
            is_deleted: row.try_get("is_deleted")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SpaceSummaryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            space: SpaceRecord::from_row(row)?,
            tenant_count: count_from_db("tenant_count", row.try_get("tenant_count")?)?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SpaceMetricsRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            total_spaces: count_from_db("total_spaces", row.try_get("total_spaces")?)?,
            active_spaces: count_from_db("active_spaces", row.try_get("active_spaces")?)?,
            total_tenants: count_from_db("total_tenants", row.try_get("total_tenants")?)?,
            monthly_revenue: row.try_get::<Decimal, _>("monthly_revenue")?,
        })
    }
}
