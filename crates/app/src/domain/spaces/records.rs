//! Space Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Space UUID
pub type SpaceUuid = TypedUuid<SpaceRecord>;

/// Space Record
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceRecord {
    pub uuid: SpaceUuid,

    /// User who listed the space and holds every mutation right over it.
    pub host_uuid: UserUuid,

    pub title: String,
    pub description: Option<String>,
    pub space_type: String,
    pub capacity: u32,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SpaceRecord {
    /// Whether `user` hosts this space.
    #[must_use]
    pub fn is_hosted_by(&self, user: UserUuid) -> bool {
        self.host_uuid == user
    }
}

/// A host's space with the number of tenants currently on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceSummaryRecord {
    pub space: SpaceRecord,

    /// Non-deleted tenants of the space.
    pub tenant_count: u64,
}

/// Portfolio figures for one host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceMetricsRecord {
    pub total_spaces: u64,
    pub active_spaces: u64,
    pub total_tenants: u64,

    /// Sum of the rent of every active tenant.
    pub monthly_revenue: Decimal,
}
