//! Space Requests

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    requests::{
        LooseBool, LooseNumber, RequestError, optional, optional_bool, optional_u32, patch,
        required,
    },
    spaces::{
        data::{NewSpace, SpaceFilter, SpaceUpdate},
        records::SpaceUuid,
    },
};

/// Create Space Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateSpaceRequest {
    pub uuid: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub space_type: Option<String>,
    pub capacity: Option<LooseNumber>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl TryFrom<CreateSpaceRequest> for NewSpace {
    type Error = RequestError;

    fn try_from(request: CreateSpaceRequest) -> Result<Self, Self::Error> {
        let title = required(request.title, "title")?;
        let space_type = required(request.space_type, "space_type")?;
        let capacity = optional_u32(request.capacity.as_ref(), "capacity")?
            .ok_or(RequestError::MissingField("capacity"))?;

        Ok(NewSpace {
            uuid: request.uuid.map_or_else(SpaceUuid::new, SpaceUuid::from_uuid),
            title,
            description: optional(request.description),
            space_type,
            capacity,
            street_address: required(request.street_address, "street_address")?,
            city: required(request.city, "city")?,
            state: required(request.state, "state")?,
            zip_code: required(request.zip_code, "zip_code")?,
            country: required(request.country, "country")?,
        })
    }
}

/// Update Space Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateSpaceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub space_type: Option<String>,
    pub capacity: Option<LooseNumber>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub is_active: Option<LooseBool>,
}

impl TryFrom<UpdateSpaceRequest> for SpaceUpdate {
    type Error = RequestError;

    fn try_from(request: UpdateSpaceRequest) -> Result<Self, Self::Error> {
        Ok(SpaceUpdate {
            title: patch(request.title),
            description: patch(request.description),
            space_type: patch(request.space_type),
            capacity: optional_u32(request.capacity.as_ref(), "capacity")?,
            street_address: patch(request.street_address),
            city: patch(request.city),
            state: patch(request.state),
            zip_code: patch(request.zip_code),
            country: patch(request.country),
            is_active: optional_bool(request.is_active.as_ref(), "is_active")?,
        })
    }
}

/// Browse Spaces Query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BrowseSpacesRequest {
    pub city: Option<String>,
    pub space_type: Option<String>,
    pub min_capacity: Option<LooseNumber>,
}

impl TryFrom<BrowseSpacesRequest> for SpaceFilter {
    type Error = RequestError;

    fn try_from(request: BrowseSpacesRequest) -> Result<Self, Self::Error> {
        Ok(SpaceFilter {
            city: optional(request.city),
            space_type: optional(request.space_type),
            min_capacity: optional_u32(request.min_capacity.as_ref(), "min_capacity")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::domain::ErrorKind;

    use super::*;

    fn create_json() -> serde_json::Value {
        json!({
            "title": "Riverside Loft",
            "description": "  ",
            "space_type": "apartment",
            "capacity": "4",
            "street_address": "12 Tran Hung Dao",
            "city": "Hanoi",
            "state": "Hoan Kiem",
            "zip_code": "100000",
            "country": "Vietnam"
        })
    }

    #[test]
    fn create_request_accepts_numeric_string_capacity() -> TestResult {
        let request: CreateSpaceRequest = serde_json::from_value(create_json())?;

        let space = NewSpace::try_from(request)?;

        assert_eq!(space.title, "Riverside Loft");
        assert_eq!(space.capacity, 4);
        assert_eq!(space.description, None);
        assert_eq!(space.country, "Vietnam");

        Ok(())
    }

    #[test]
    fn create_request_keeps_supplied_uuid() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut value = create_json();
        value["uuid"] = json!(uuid);

        let request: CreateSpaceRequest = serde_json::from_value(value)?;

        assert_eq!(NewSpace::try_from(request)?.uuid.into_uuid(), uuid);

        Ok(())
    }

    #[test]
    fn create_request_reports_first_missing_field() -> TestResult {
        let mut value = create_json();
        value["title"] = json!("");
        if let Some(object) = value.as_object_mut() {
            object.remove("city");
        }

        let request: CreateSpaceRequest = serde_json::from_value(value)?;

        let error = NewSpace::try_from(request).err();

        assert_eq!(error, Some(RequestError::MissingField("title")));
        assert_eq!(error.as_ref().map(RequestError::kind), Some(ErrorKind::Validation));

        Ok(())
    }

    #[test]
    fn create_request_missing_capacity_is_named() -> TestResult {
        let mut value = create_json();
        value["capacity"] = json!(null);

        let request: CreateSpaceRequest = serde_json::from_value(value)?;

        assert_eq!(
            NewSpace::try_from(request).err(),
            Some(RequestError::MissingField("capacity"))
        );

        Ok(())
    }

    #[test]
    fn create_request_non_numeric_capacity_is_rejected() -> TestResult {
        let mut value = create_json();
        value["capacity"] = json!("lots");

        let request: CreateSpaceRequest = serde_json::from_value(value)?;

        assert_eq!(
            NewSpace::try_from(request).err(),
            Some(RequestError::InvalidNumber("capacity"))
        );

        Ok(())
    }

    #[test]
    fn update_request_accepts_string_is_active() -> TestResult {
        let request: UpdateSpaceRequest =
            serde_json::from_value(json!({ "is_active": "false" }))?;

        let update = SpaceUpdate::try_from(request)?;

        assert_eq!(
            update,
            SpaceUpdate {
                is_active: Some(false),
                ..SpaceUpdate::default()
            }
        );

        Ok(())
    }

    #[test]
    fn update_request_rejects_unknown_boolean_spelling() -> TestResult {
        let request: UpdateSpaceRequest = serde_json::from_value(json!({ "is_active": "on" }))?;

        assert_eq!(
            SpaceUpdate::try_from(request).err(),
            Some(RequestError::InvalidBool("is_active"))
        );

        Ok(())
    }

    #[test]
    fn empty_update_request_is_an_empty_patch() -> TestResult {
        let request: UpdateSpaceRequest = serde_json::from_value(json!({}))?;

        assert!(SpaceUpdate::try_from(request)?.is_empty());

        Ok(())
    }

    #[test]
    fn browse_request_ignores_blank_criteria() -> TestResult {
        let request: BrowseSpacesRequest = serde_json::from_value(json!({
            "city": "",
            "space_type": "studio",
            "min_capacity": 2
        }))?;

        assert_eq!(
            SpaceFilter::try_from(request)?,
            SpaceFilter {
                city: None,
                space_type: Some("studio".to_string()),
                min_capacity: Some(2),
            }
        );

        Ok(())
    }
}
