//! Booking Data

use jiff::civil::Date;

use crate::domain::{bookings::records::BookingUuid, spaces::records::SpaceUuid};

/// New Booking Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub uuid: BookingUuid,
    pub space_uuid: SpaceUuid,
    pub start_date: Date,
    pub end_date: Date,
}
