//! Tenant Requests

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    requests::{LooseNumber, RequestError, optional, optional_decimal, patch, required},
    spaces::records::SpaceUuid,
    tenants::{
        data::{NewTenant, TenantUpdate},
        records::TenantUuid,
    },
};

/// Create Tenant Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateTenantRequest {
    pub uuid: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub rent_amount: Option<LooseNumber>,
    pub security_deposit: Option<LooseNumber>,
    pub notes: Option<String>,
}

impl TryFrom<CreateTenantRequest> for NewTenant {
    type Error = RequestError;

    fn try_from(request: CreateTenantRequest) -> Result<Self, Self::Error> {
        let first_name = required(request.first_name, "first_name")?;
        let last_name = required(request.last_name, "last_name")?;
        let email = required(request.email, "email")?;

        let space_uuid = request
            .space_id
            .map(SpaceUuid::from_uuid)
            .ok_or(RequestError::MissingField("space_id"))?;

        let start_date = request
            .start_date
            .ok_or(RequestError::MissingField("start_date"))?;

        let end_date = request
            .end_date
            .ok_or(RequestError::MissingField("end_date"))?;

        Ok(NewTenant {
            uuid: request
                .uuid
                .map_or_else(TenantUuid::new, TenantUuid::from_uuid),
            space_uuid,
            first_name,
            last_name,
            email,
            phone_number: optional(request.phone_number),
            start_date,
            end_date,
            rent_amount: optional_decimal(request.rent_amount.as_ref(), "rent_amount")?,
            security_deposit: optional_decimal(
                request.security_deposit.as_ref(),
                "security_deposit",
            )?,
            notes: optional(request.notes),
        })
    }
}

/// Update Tenant Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTenantRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub rent_amount: Option<LooseNumber>,
    pub security_deposit: Option<LooseNumber>,
    pub notes: Option<String>,
}

impl TryFrom<UpdateTenantRequest> for TenantUpdate {
    type Error = RequestError;

    fn try_from(request: UpdateTenantRequest) -> Result<Self, Self::Error> {
        Ok(TenantUpdate {
            first_name: patch(request.first_name),
            last_name: patch(request.last_name),
            email: patch(request.email),
            phone_number: patch(request.phone_number),
            start_date: request.start_date,
            end_date: request.end_date,
            rent_amount: optional_decimal(request.rent_amount.as_ref(), "rent_amount")?,
            security_deposit: optional_decimal(
                request.security_deposit.as_ref(),
                "security_deposit",
            )?,
            notes: patch(request.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn create_json(space_id: Uuid) -> serde_json::Value {
        json!({
            "space_id": space_id,
            "first_name": "Lan",
            "last_name": "Nguyen",
            "email": "lan@example.com",
            "start_date": "2024-01-01",
            "end_date": "2024-12-31",
            "rent_amount": "500.00"
        })
    }

    #[test]
    fn create_request_parses_dates_and_string_rent() -> TestResult {
        let space_id = Uuid::now_v7();
        let request: CreateTenantRequest = serde_json::from_value(create_json(space_id))?;

        let tenant = NewTenant::try_from(request)?;

        assert_eq!(tenant.space_uuid.into_uuid(), space_id);
        assert_eq!(tenant.start_date, date(2024, 1, 1));
        assert_eq!(tenant.end_date, date(2024, 12, 31));
        assert_eq!(tenant.rent_amount, Some(Decimal::new(50000, 2)));
        assert_eq!(tenant.security_deposit, None);
        assert_eq!(tenant.phone_number, None);

        Ok(())
    }

    #[test]
    fn create_request_without_space_is_missing_field() -> TestResult {
        let mut value = create_json(Uuid::now_v7());
        value["space_id"] = json!(null);

        let request: CreateTenantRequest = serde_json::from_value(value)?;

        assert_eq!(
            NewTenant::try_from(request).err(),
            Some(RequestError::MissingField("space_id"))
        );

        Ok(())
    }

    #[test]
    fn create_request_without_end_date_is_missing_field() -> TestResult {
        let mut value = create_json(Uuid::now_v7());
        if let Some(object) = value.as_object_mut() {
            object.remove("end_date");
        }

        let request: CreateTenantRequest = serde_json::from_value(value)?;

        assert_eq!(
            NewTenant::try_from(request).err(),
            Some(RequestError::MissingField("end_date"))
        );

        Ok(())
    }

    #[test]
    fn create_request_non_numeric_rent_is_rejected() -> TestResult {
        let mut value = create_json(Uuid::now_v7());
        value["rent_amount"] = json!("five hundred");

        let request: CreateTenantRequest = serde_json::from_value(value)?;

        assert_eq!(
            NewTenant::try_from(request).err(),
            Some(RequestError::InvalidNumber("rent_amount"))
        );

        Ok(())
    }

    #[test]
    fn update_request_accepts_numeric_deposit() -> TestResult {
        let request: UpdateTenantRequest = serde_json::from_value(json!({
            "security_deposit": 1000,
            "end_date": "2025-06-30"
        }))?;

        assert_eq!(
            TenantUpdate::try_from(request)?,
            TenantUpdate {
                security_deposit: Some(Decimal::from(1000)),
                end_date: Some(date(2025, 6, 30)),
                ..TenantUpdate::default()
            }
        );

        Ok(())
    }
}
