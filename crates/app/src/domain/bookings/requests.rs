//! Booking Requests

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    bookings::{
        data::NewBooking,
        records::{BookingStatus, BookingUuid},
    },
    requests::{RequestError, required},
    spaces::records::SpaceUuid,
};

/// Create Booking Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateBookingRequest {
    pub uuid: Option<Uuid>,
    pub space_id: Option<Uuid>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = RequestError;

    fn try_from(request: CreateBookingRequest) -> Result<Self, Self::Error> {
        Ok(NewBooking {
            uuid: request
                .uuid
                .map_or_else(BookingUuid::new, BookingUuid::from_uuid),
            space_uuid: request
                .space_id
                .map(SpaceUuid::from_uuid)
                .ok_or(RequestError::MissingField("space_id"))?,
            start_date: request
                .start_date
                .ok_or(RequestError::MissingField("start_date"))?,
            end_date: request
                .end_date
                .ok_or(RequestError::MissingField("end_date"))?,
        })
    }
}

/// Update Booking Status Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateBookingStatusRequest {
    pub status: Option<String>,
}

impl TryFrom<UpdateBookingStatusRequest> for BookingStatus {
    type Error = RequestError;

    fn try_from(request: UpdateBookingStatusRequest) -> Result<Self, Self::Error> {
        required(request.status, "status")?
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| RequestError::InvalidStatus("status"))
    }
}
