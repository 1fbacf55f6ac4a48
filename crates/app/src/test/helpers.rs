//! Test Helpers

use jiff::civil::date;
use rust_decimal::Decimal;

use crate::{
    domain::{
        bookings::{data::NewBooking, records::BookingUuid},
        spaces::{
            SpacesService, SpacesServiceError,
            data::NewSpace,
            records::{SpaceRecord, SpaceUuid},
        },
        tenants::{
            TenantsService, TenantsServiceError,
            data::NewTenant,
            records::{TenantRecord, TenantUuid},
        },
        users::records::UserUuid,
    },
    test::TestContext,
};

pub(crate) fn new_space(title: &str) -> NewSpace {
    NewSpace {
        uuid: SpaceUuid::new(),
        title: title.to_string(),
        description: None,
        space_type: "apartment".to_string(),
        capacity: 4,
        street_address: "12 Tran Hung Dao".to_string(),
        city: "Hanoi".to_string(),
        state: "Hoan Kiem".to_string(),
        zip_code: "100000".to_string(),
        country: "Vietnam".to_string(),
    }
}

/// A year-long lease starting 2024-01-01 with no amounts set.
pub(crate) fn new_tenant(space: SpaceUuid) -> NewTenant {
    NewTenant {
        uuid: TenantUuid::new(),
        space_uuid: space,
        first_name: "Lan".to_string(),
        last_name: "Nguyen".to_string(),
        email: "lan@example.com".to_string(),
        phone_number: None,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 12, 31),
        rent_amount: None,
        security_deposit: None,
        notes: None,
    }
}

pub(crate) fn new_booking(space: SpaceUuid) -> NewBooking {
    NewBooking {
        uuid: BookingUuid::new(),
        space_uuid: space,
        start_date: date(2024, 5, 1),
        end_date: date(2024, 5, 3),
    }
}

pub(crate) async fn create_space(
    ctx: &TestContext,
    host: UserUuid,
    title: &str,
) -> Result<SpaceRecord, SpacesServiceError> {
    ctx.spaces.create_space(host, new_space(title)).await
}

pub(crate) async fn add_tenant(
    ctx: &TestContext,
    host: UserUuid,
    space: SpaceUuid,
    rent: Decimal,
) -> Result<TenantRecord, TenantsServiceError> {
    ctx.tenants
        .create_tenant(
            host,
            NewTenant {
                rent_amount: Some(rent),
                ..new_tenant(space)
            },
        )
        .await
}
