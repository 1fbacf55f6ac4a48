//! Tenant Data

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::domain::{spaces::records::SpaceUuid, tenants::records::TenantUuid};

/// New Tenant Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewTenant {
    pub uuid: TenantUuid,
    pub space_uuid: SpaceUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub start_date: Date,
    pub end_date: Date,

    /// Defaults to zero when absent.
    pub rent_amount: Option<Decimal>,

    /// Defaults to zero when absent.
    pub security_deposit: Option<Decimal>,

    pub notes: Option<String>,
}

/// Tenant Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenantUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub rent_amount: Option<Decimal>,
    pub security_deposit: Option<Decimal>,
    pub notes: Option<String>,
}
