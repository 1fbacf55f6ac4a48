//! Lease standing.
//!
//! Standing is derived from a tenant's end date relative to "today" and is
//! never persisted. The per-space tenant list flags leases ending within 30
//! days, the host-wide tenant list within 60.

use jiff::civil::Date;

use crate::domain::tenants::records::TenantRecord;

/// Ending-soon window of a single space's tenant list, in days.
pub const SPACE_VIEW_ENDING_SOON_DAYS: i64 = 30;

/// Ending-soon window of the host-wide tenant list, in days.
pub const HOST_VIEW_ENDING_SOON_DAYS: i64 = 60;

/// Window of the "leases ending soon" metric, in days, both ends inclusive.
pub const METRICS_ENDING_SOON_DAYS: i32 = 30;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaseStanding {
    /// The lease runs beyond the ending-soon window, or ends today.
    Current,

    /// The lease ends within the window.
    EndingSoon { days_left: i64 },

    /// The end date has passed.
    Expired { days_overdue: i64 },

    /// The tenant has been removed.
    Deleted,
}

impl LeaseStanding {
    /// Classifies a tenant as of `today` using the given ending-soon window.
    #[must_use]
    pub fn of(tenant: &TenantRecord, today: Date, window_days: i64) -> Self {
        if tenant.is_deleted {
            return Self::Deleted;
        }

        Self::classify(tenant.end_date, today, window_days)
    }

    /// Classifies a lease end date as of `today`.
    #[must_use]
    pub fn classify(end_date: Date, today: Date, window_days: i64) -> Self {
        let days_until_end = days_between(today, end_date);

        if days_until_end < 0 {
            Self::Expired {
                days_overdue: -days_until_end,
            }
        } else if days_until_end > 0 && days_until_end <= window_days {
            Self::EndingSoon {
                days_left: days_until_end,
            }
        } else {
            Self::Current
        }
    }

    #[must_use]
    pub fn is_ending_soon(self) -> bool {
        matches!(self, Self::EndingSoon { .. })
    }

    #[must_use]
    pub fn is_expired(self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
fn days_between(from: Date, to: Date) -> i64 {
    from.duration_until(to).as_secs() / SECONDS_PER_DAY
}
