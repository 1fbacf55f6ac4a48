//! Spaces service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, instrument, warn};

use crate::{
    database::Db,
    domain::{
        errors::{first_blank_field, first_blank_update},
        spaces::{
            data::{NewSpace, SpaceFilter, SpaceUpdate},
            errors::SpacesServiceError,
            records::{SpaceMetricsRecord, SpaceRecord, SpaceSummaryRecord, SpaceUuid},
            repository::PgSpacesRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgSpacesService {
    db: Db,
    repository: PgSpacesRepository,
}

impl PgSpacesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSpacesRepository::new(),
        }
    }
}

/// Capacity is stored as a Postgres `integer` and must be at least one.
fn validate_capacity(capacity: u32) -> Result<(), SpacesServiceError> {
    if capacity == 0 {
        return Err(SpacesServiceError::InvalidCapacity);
    }

    i32::try_from(capacity)?;

    Ok(())
}

fn validate_new_space(space: &NewSpace) -> Result<(), SpacesServiceError> {
    if let Some(field) = first_blank_field([
        ("title", space.title.as_str()),
        ("space_type", space.space_type.as_str()),
    ]) {
        return Err(SpacesServiceError::MissingField(field));
    }

    validate_capacity(space.capacity)?;

    if let Some(field) = first_blank_field([
        ("street_address", space.street_address.as_str()),
        ("city", space.city.as_str()),
        ("state", space.state.as_str()),
        ("zip_code", space.zip_code.as_str()),
        ("country", space.country.as_str()),
    ]) {
        return Err(SpacesServiceError::MissingField(field));
    }

    Ok(())
}

fn validate_space_update(update: &SpaceUpdate) -> Result<(), SpacesServiceError> {
    if let Some(field) = first_blank_update([
        ("title", update.title.as_deref()),
        ("space_type", update.space_type.as_deref()),
    ]) {
        return Err(SpacesServiceError::MissingField(field));
    }

    if let Some(capacity) = update.capacity {
        validate_capacity(capacity)?;
    }

    if let Some(field) = first_blank_update([
        ("street_address", update.street_address.as_deref()),
        ("city", update.city.as_deref()),
        ("state", update.state.as_deref()),
        ("zip_code", update.zip_code.as_deref()),
        ("country", update.country.as_deref()),
    ]) {
        return Err(SpacesServiceError::MissingField(field));
    }

    Ok(())
}

fn authorize(space: &SpaceRecord, host: UserUuid) -> Result<(), SpacesServiceError> {
    if space.is_hosted_by(host) {
        Ok(())
    } else {
        Err(SpacesServiceError::Forbidden)
    }
}

#[async_trait]
impl SpacesService for PgSpacesService {
    #[instrument(skip(self, space), fields(space = %space.uuid))]
    async fn create_space(
        &self,
        host: UserUuid,
        space: NewSpace,
    ) -> Result<SpaceRecord, SpacesServiceError> {
        validate_new_space(&space)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_space(&mut tx, host, space).await?;

        tx.commit().await?;

        info!("space listed");

        Ok(created)
    }

    async fn get_space(
        &self,
        space: SpaceUuid,
        host: UserUuid,
    ) -> Result<SpaceRecord, SpacesServiceError> {
        let mut tx = self.db.begin().await?;

        let space = self.repository.get_space(&mut tx, space).await?;

        tx.commit().await?;

        authorize(&space, host)?;

        Ok(space)
    }

    async fn list_spaces(
        &self,
        host: UserUuid,
    ) -> Result<Vec<SpaceSummaryRecord>, SpacesServiceError> {
        let mut tx = self.db.begin().await?;

        let spaces = self.repository.list_host_spaces(&mut tx, host).await?;

        tx.commit().await?;

        Ok(spaces)
    }

    async fn browse_spaces(
        &self,
        filter: SpaceFilter,
    ) -> Result<Vec<SpaceRecord>, SpacesServiceError> {
        if let Some(min_capacity) = filter.min_capacity {
            i32::try_from(min_capacity)?;
        }

        let mut tx = self.db.begin().await?;

        let spaces = self.repository.browse_spaces(&mut tx, filter).await?;

        tx.commit().await?;

        Ok(spaces)
    }

    #[instrument(skip(self, update))]
    async fn update_space(
        &self,
        space: SpaceUuid,
        host: UserUuid,
        update: SpaceUpdate,
    ) -> Result<SpaceRecord, SpacesServiceError> {
        validate_space_update(&update)?;

        let mut tx = self.db.begin().await?;

        let existing = self.repository.get_space(&mut tx, space).await?;

        authorize(&existing, host)?;

        let updated = self.repository.update_space(&mut tx, space, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_space(
        &self,
        space: SpaceUuid,
        host: UserUuid,
    ) -> Result<SpaceRecord, SpacesServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.repository.lock_space(&mut tx, space).await?;

        authorize(&existing, host)?;

        let active_tenants = self.repository.count_active_tenants(&mut tx, space).await?;

        if active_tenants > 0 {
            tx.rollback().await?;

            warn!(active_tenants, "refused to delete space with active tenants");

            return Err(SpacesServiceError::ActiveTenants {
                count: active_tenants,
            });
        }

        let tenants = self
            .repository
            .soft_delete_space_tenants(&mut tx, space)
            .await?;

        let deleted = self.repository.soft_delete_space(&mut tx, space).await?;

        tx.commit().await?;

        info!(tenants, "space deleted");

        Ok(deleted)
    }

    async fn space_metrics(
        &self,
        host: UserUuid,
    ) -> Result<SpaceMetricsRecord, SpacesServiceError> {
        let mut tx = self.db.begin().await?;

        let metrics = self.repository.space_metrics(&mut tx, host).await?;

        tx.commit().await?;

        Ok(metrics)
    }
}

#[automock]
#[async_trait]
/// Space lifecycle operations. Every mutation is restricted to the space's host.
pub trait SpacesService: Send + Sync {
    /// Lists a new, active space owned by `host`.
    async fn create_space(
        &self,
        host: UserUuid,
        space: NewSpace,
    ) -> Result<SpaceRecord, SpacesServiceError>;

    /// Retrieves one of the host's spaces.
    async fn get_space(
        &self,
        space: SpaceUuid,
        host: UserUuid,
    ) -> Result<SpaceRecord, SpacesServiceError>;

    /// Lists the host's spaces, newest first, with their tenant counts.
    async fn list_spaces(
        &self,
        host: UserUuid,
    ) -> Result<Vec<SpaceSummaryRecord>, SpacesServiceError>;

    /// Lists active spaces of every host matching the filter.
    async fn browse_spaces(
        &self,
        filter: SpaceFilter,
    ) -> Result<Vec<SpaceRecord>, SpacesServiceError>;

    /// Applies a partial update to one of the host's spaces.
    async fn update_space(
        &self,
        space: SpaceUuid,
        host: UserUuid,
        update: SpaceUpdate,
    ) -> Result<SpaceRecord, SpacesServiceError>;

    /// Soft-deletes a space together with its tenants.
    ///
    /// Refused with [`SpacesServiceError::ActiveTenants`] while any tenant of
    /// the space is still active; in that case nothing is changed.
    async fn delete_space(
        &self,
        space: SpaceUuid,
        host: UserUuid,
    ) -> Result<SpaceRecord, SpacesServiceError>;

    /// Aggregates the host's portfolio figures.
    async fn space_metrics(
        &self,
        host: UserUuid,
    ) -> Result<SpaceMetricsRecord, SpacesServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;
    use sqlx::query;
    use testresult::TestResult;

    use crate::{
        domain::{
            ErrorKind,
            tenants::{TenantsService, data::NewTenant, records::TenantStatus},
        },
        test::{
            TestContext,
            helpers::{add_tenant, create_space, new_space, new_tenant},
        },
    };

    use super::*;

    #[tokio::test]
    async fn create_space_is_active_and_owned_by_host() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let space = ctx.spaces.create_space(host, new_space("Loft")).await?;

        assert_eq!(space.host_uuid, host);
        assert_eq!(space.title, "Loft");
        assert!(space.is_active);
        assert!(!space.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn create_space_reports_first_missing_field() {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let result = ctx
            .spaces
            .create_space(
                host,
                NewSpace {
                    city: String::new(),
                    country: String::new(),
                    ..new_space("Loft")
                },
            )
            .await;

        assert!(
            matches!(result, Err(SpacesServiceError::MissingField("city"))),
            "expected MissingField(city), got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_space_zero_capacity_is_rejected() {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let result = ctx
            .spaces
            .create_space(
                host,
                NewSpace {
                    capacity: 0,
                    ..new_space("Loft")
                },
            )
            .await;

        assert!(
            matches!(result, Err(SpacesServiceError::InvalidCapacity)),
            "expected InvalidCapacity, got {result:?}"
        );
    }

    #[test]
    fn capacity_beyond_integer_column_is_a_validation_error() {
        let oversized = NewSpace {
            capacity: 3_000_000_000,
            ..new_space("Stadium")
        };

        let result = validate_new_space(&oversized);

        assert!(
            matches!(result, Err(SpacesServiceError::InvalidCapacity)),
            "expected InvalidCapacity, got {result:?}"
        );
        assert_eq!(
            result.as_ref().err().map(SpacesServiceError::kind),
            Some(ErrorKind::Validation)
        );

        let update = SpaceUpdate {
            capacity: Some(u32::MAX),
            ..SpaceUpdate::default()
        };

        assert!(matches!(
            validate_space_update(&update),
            Err(SpacesServiceError::InvalidCapacity)
        ));

        assert!(validate_capacity(2_147_483_647).is_ok());
    }

    #[tokio::test]
    async fn oversized_capacity_is_rejected_before_storage() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let created = ctx
            .spaces
            .create_space(
                host,
                NewSpace {
                    capacity: 3_000_000_000,
                    ..new_space("Stadium")
                },
            )
            .await;

        assert_eq!(
            created.as_ref().err().map(SpacesServiceError::kind),
            Some(ErrorKind::Validation)
        );

        let browsed = ctx
            .spaces
            .browse_spaces(SpaceFilter {
                min_capacity: Some(3_000_000_000),
                ..SpaceFilter::default()
            })
            .await;

        assert!(
            matches!(browsed, Err(SpacesServiceError::InvalidCapacity)),
            "expected InvalidCapacity, got {browsed:?}"
        );

        let spaces = ctx.spaces.list_spaces(host).await?;
        assert!(spaces.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_space_unknown_host_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .spaces
            .create_space(UserUuid::new(), new_space("Orphan"))
            .await;

        assert!(
            matches!(result, Err(SpacesServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_space_by_other_user_is_forbidden() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let other = ctx.create_user("other@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        let result = ctx.spaces.get_space(space.uuid, other).await;

        assert!(
            matches!(result, Err(SpacesServiceError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );
        assert_eq!(
            result.as_ref().err().map(SpacesServiceError::kind),
            Some(ErrorKind::Authorization)
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_space_changes_only_supplied_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        let updated = ctx
            .spaces
            .update_space(
                space.uuid,
                host,
                SpaceUpdate {
                    title: Some("Riverside Loft".to_string()),
                    is_active: Some(false),
                    ..SpaceUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.title, "Riverside Loft");
        assert!(!updated.is_active);
        assert_eq!(updated.city, space.city);
        assert_eq!(updated.capacity, space.capacity);
        assert_eq!(updated.description, space.description);

        Ok(())
    }

    #[tokio::test]
    async fn update_space_with_empty_patch_keeps_business_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        let update = SpaceUpdate::default();
        assert!(update.is_empty());

        let updated = ctx.spaces.update_space(space.uuid, host, update).await?;

        assert!(updated.updated_at >= space.updated_at);
        assert_eq!(
            SpaceRecord {
                updated_at: space.updated_at,
                ..updated
            },
            space
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_space_by_other_user_is_forbidden() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let other = ctx.create_user("other@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        let result = ctx
            .spaces
            .update_space(
                space.uuid,
                other,
                SpaceUpdate {
                    title: Some("Stolen".to_string()),
                    ..SpaceUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(SpacesServiceError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );

        let stored = ctx.spaces.get_space(space.uuid, host).await?;
        assert_eq!(stored.title, "Loft");

        Ok(())
    }

    #[tokio::test]
    async fn update_space_blank_title_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        let result = ctx
            .spaces
            .update_space(
                space.uuid,
                host,
                SpaceUpdate {
                    title: Some("  ".to_string()),
                    ..SpaceUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(SpacesServiceError::MissingField("title"))),
            "expected MissingField(title), got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_space_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let result = ctx
            .spaces
            .update_space(SpaceUuid::new(), host, SpaceUpdate::default())
            .await;

        assert!(
            matches!(result, Err(SpacesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_space_with_active_tenant_is_refused_and_changes_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;
        let tenant = add_tenant(&ctx, host, space.uuid, Decimal::from(500)).await?;

        let result = ctx.spaces.delete_space(space.uuid, host).await;

        assert!(
            matches!(result, Err(SpacesServiceError::ActiveTenants { count: 1 })),
            "expected ActiveTenants {{ count: 1 }}, got {result:?}"
        );
        assert_eq!(
            result.as_ref().err().map(SpacesServiceError::kind),
            Some(ErrorKind::Conflict)
        );

        let stored_space = ctx.spaces.get_space(space.uuid, host).await?;
        assert!(!stored_space.is_deleted);
        assert!(stored_space.is_active);

        let stored_tenant = ctx.tenants.get_tenant(tenant.uuid, host).await?;
        assert!(!stored_tenant.is_deleted);
        assert_eq!(stored_tenant.status, TenantStatus::Active);

        Ok(())
    }

    #[tokio::test]
    async fn delete_space_without_active_tenants_cascades() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;
        let tenant = add_tenant(&ctx, host, space.uuid, Decimal::from(500)).await?;
        let removed = ctx.tenants.delete_tenant(tenant.uuid, host).await?;

        let deleted = ctx.spaces.delete_space(space.uuid, host).await?;

        assert!(deleted.is_deleted);
        assert!(!deleted.is_active);

        let (status, is_deleted, updated_at): (String, bool, jiff_sqlx::Timestamp) =
            sqlx::query_as(
                "SELECT status, is_deleted, updated_at FROM tenants WHERE tenant_id = $1",
            )
            .bind(tenant.uuid.into_uuid())
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(status, "deleted");
        assert!(is_deleted);
        assert!(updated_at.to_jiff() >= removed.updated_at);

        let result = ctx.spaces.get_space(space.uuid, host).await;
        assert!(
            matches!(result, Err(SpacesServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_space_failure_after_tenant_cascade_rolls_back_both() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;
        let tenant = add_tenant(&ctx, host, space.uuid, Decimal::from(500)).await?;
        let removed = ctx.tenants.delete_tenant(tenant.uuid, host).await?;

        query(
            "CREATE FUNCTION fail_space_update() RETURNS trigger LANGUAGE plpgsql AS $$ \
             BEGIN RAISE EXCEPTION 'simulated crash'; END; $$",
        )
        .execute(ctx.db.pool())
        .await?;

        query(
            "CREATE TRIGGER fail_space_update BEFORE UPDATE ON spaces \
             FOR EACH ROW EXECUTE FUNCTION fail_space_update()",
        )
        .execute(ctx.db.pool())
        .await?;

        let result = ctx.spaces.delete_space(space.uuid, host).await;

        assert!(
            matches!(result, Err(SpacesServiceError::Sql(_))),
            "expected Sql error, got {result:?}"
        );

        let stored_space = ctx.spaces.get_space(space.uuid, host).await?;
        assert!(!stored_space.is_deleted);

        let (updated_at,): (jiff_sqlx::Timestamp,) =
            sqlx::query_as("SELECT updated_at FROM tenants WHERE tenant_id = $1")
                .bind(tenant.uuid.into_uuid())
                .fetch_one(ctx.db.pool())
                .await?;

        assert_eq!(
            updated_at.to_jiff(),
            removed.updated_at,
            "tenant cascade must not be committed"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_space_waits_for_tenant_being_added() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        let mut writer = ctx.db.pool().begin().await?;

        query(
            "INSERT INTO tenants (tenant_id, space_id, first_name, last_name, email, \
             start_date, end_date, status, is_deleted) \
             VALUES ($1, $2, 'Lan', 'Nguyen', 'lan@example.com', \
             DATE '2024-01-01', DATE '2024-12-31', 'active', FALSE)",
        )
        .bind(uuid::Uuid::now_v7())
        .bind(space.uuid.into_uuid())
        .execute(&mut *writer)
        .await?;

        let spaces = ctx.spaces.clone();
        let deletion = tokio::spawn(async move { spaces.delete_space(space.uuid, host).await });

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        assert!(!deletion.is_finished(), "delete must wait for the tenant insert");

        writer.commit().await?;

        let result = deletion.await?;

        assert!(
            matches!(result, Err(SpacesServiceError::ActiveTenants { count: 1 })),
            "expected ActiveTenants(1), got {result:?}"
        );

        let stored = ctx.spaces.get_space(space.uuid, host).await?;
        assert!(!stored.is_deleted);

        Ok(())
    }

    #[tokio::test]
    async fn delete_space_by_other_user_is_forbidden() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let other = ctx.create_user("other@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        let result = ctx.spaces.delete_space(space.uuid, other).await;

        assert!(
            matches!(result, Err(SpacesServiceError::Forbidden)),
            "expected Forbidden, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_space_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let space = create_space(&ctx, host, "Loft").await?;

        ctx.spaces.delete_space(space.uuid, host).await?;

        let result = ctx.spaces.delete_space(space.uuid, host).await;

        assert!(
            matches!(result, Err(SpacesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn space_metrics_for_host_without_spaces_are_zero() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let metrics = ctx.spaces.space_metrics(host).await?;

        assert_eq!(metrics, SpaceMetricsRecord::default());

        Ok(())
    }

    #[tokio::test]
    async fn host_with_one_tenant_scenario() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let space = ctx
            .spaces
            .create_space(
                host,
                NewSpace {
                    capacity: 2,
                    ..new_space("A")
                },
            )
            .await?;

        ctx.tenants
            .create_tenant(
                host,
                NewTenant {
                    start_date: date(2024, 1, 1),
                    end_date: date(2024, 6, 1),
                    rent_amount: Some(Decimal::from(500)),
                    ..new_tenant(space.uuid)
                },
            )
            .await?;

        let metrics = ctx.spaces.space_metrics(host).await?;

        assert_eq!(metrics.total_spaces, 1);
        assert_eq!(metrics.active_spaces, 1);
        assert_eq!(metrics.total_tenants, 1);
        assert_eq!(metrics.monthly_revenue, Decimal::from(500));

        let result = ctx.spaces.delete_space(space.uuid, host).await;

        assert!(
            matches!(result, Err(SpacesServiceError::ActiveTenants { count: 1 })),
            "expected ActiveTenants {{ count: 1 }}, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn space_metrics_ignore_deleted_and_count_inactive() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let kept = create_space(&ctx, host, "Kept").await?;
        add_tenant(&ctx, host, kept.uuid, Decimal::from(300)).await?;
        add_tenant(&ctx, host, kept.uuid, Decimal::new(45050, 2)).await?;

        let paused = create_space(&ctx, host, "Paused").await?;
        ctx.spaces
            .update_space(
                paused.uuid,
                host,
                SpaceUpdate {
                    is_active: Some(false),
                    ..SpaceUpdate::default()
                },
            )
            .await?;

        let gone = create_space(&ctx, host, "Gone").await?;
        ctx.spaces.delete_space(gone.uuid, host).await?;

        let metrics = ctx.spaces.space_metrics(host).await?;

        assert_eq!(metrics.total_spaces, 2);
        assert_eq!(metrics.active_spaces, 1);
        assert_eq!(metrics.total_tenants, 2);
        assert_eq!(metrics.monthly_revenue, Decimal::new(75050, 2));

        Ok(())
    }

    #[tokio::test]
    async fn list_spaces_returns_host_spaces_with_tenant_counts() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;
        let other = ctx.create_user("other@example.com").await;

        let older = create_space(&ctx, host, "Older").await?;
        let newer = create_space(&ctx, host, "Newer").await?;
        create_space(&ctx, other, "Elsewhere").await?;
        add_tenant(&ctx, host, older.uuid, Decimal::from(100)).await?;

        let spaces = ctx.spaces.list_spaces(host).await?;

        let titles: Vec<&str> = spaces.iter().map(|s| s.space.title.as_str()).collect();
        assert_eq!(titles, ["Newer", "Older"]);

        let counts: Vec<u64> = spaces.iter().map(|s| s.tenant_count).collect();
        assert_eq!(counts, [0, 1]);
        assert_eq!(spaces.first().map(|s| s.space.uuid), Some(newer.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn browse_spaces_only_lists_active_matches() -> TestResult {
        let ctx = TestContext::new().await;
        let host = ctx.create_user("host@example.com").await;

        let listed = create_space(&ctx, host, "Listed").await?;

        let paused = create_space(&ctx, host, "Paused").await?;
        ctx.spaces
            .update_space(
                paused.uuid,
                host,
                SpaceUpdate {
                    is_active: Some(false),
                    ..SpaceUpdate::default()
                },
            )
            .await?;

        ctx.spaces
            .create_space(
                host,
                NewSpace {
                    city: "Da Nang".to_string(),
                    ..new_space("Beach House")
                },
            )
            .await?;

        let spaces = ctx
            .spaces
            .browse_spaces(SpaceFilter {
                city: Some("hanoi".to_string()),
                ..SpaceFilter::default()
            })
            .await?;

        let uuids: Vec<SpaceUuid> = spaces.iter().map(|s| s.uuid).collect();
        assert_eq!(uuids, [listed.uuid]);

        let roomy = ctx
            .spaces
            .browse_spaces(SpaceFilter {
                min_capacity: Some(100),
                ..SpaceFilter::default()
            })
            .await?;

        assert!(roomy.is_empty());

        Ok(())
    }
}
