//! Tenant Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;

use crate::{
    domain::{spaces::records::SpaceUuid, tenants::lease::LeaseStanding},
    uuids::TypedUuid,
};

/// Tenant UUID
pub type TenantUuid = TypedUuid<TenantRecord>;

/// Lifecycle status of a lease record.
///
/// Kept in step with `is_deleted`: a tenant is `Deleted` exactly when it is
/// soft-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenantStatus {
    Active,
    Deleted,
}

impl TenantStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }
}

impl Display for TenantStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned for a status string outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tenant status: {0}")]
pub struct UnknownTenantStatus(pub String);

impl FromStr for TenantStatus {
    type Err = UnknownTenantStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "deleted" => Ok(Self::Deleted),
            other => Err(UnknownTenantStatus(other.to_string())),
        }
    }
}

/// Tenant Record
#[derive(Debug, Clone, PartialEq)]
pub struct TenantRecord {
    pub uuid: TenantUuid,
    pub space_uuid: SpaceUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,

    /// First day of the lease.
    pub start_date: Date,

    /// Last day of the lease, always after `start_date`.
    pub end_date: Date,

    pub rent_amount: Decimal,
    pub security_deposit: Decimal,
    pub notes: Option<String>,
    pub status: TenantStatus,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TenantRecord {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Active && !self.is_deleted
    }
}

/// Tenant as shown in a listing, with its space title and lease standing.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantListingRecord {
    pub tenant: TenantRecord,
    pub space_title: String,
    pub standing: LeaseStanding,
}

/// Lease figures across every space of one host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantMetricsRecord {
    pub total_tenants: u64,
    pub active_tenants: u64,

    /// Sum of the rent of every active tenant.
    pub monthly_rent: Decimal,

    /// Active leases ending between today and the metrics window, inclusive.
    pub leases_ending_soon: u64,
}
