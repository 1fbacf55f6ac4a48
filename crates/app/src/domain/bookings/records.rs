//! Booking Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::{Timestamp, civil::Date};

use crate::{
    domain::{spaces::records::SpaceUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Booking UUID
pub type BookingUuid = TypedUuid<BookingRecord>;

/// Booking status. New bookings start out `Pending`; any authorized actor
/// may move a booking to any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
    Completed,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status: {0}")]
pub struct UnknownBookingStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "canceled" => Ok(Self::Canceled),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownBookingStatus(other.to_string())),
        }
    }
}

/// Booking Record
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub uuid: BookingUuid,
    pub space_uuid: SpaceUuid,

    /// User who asked for the booking.
    pub requester_uuid: UserUuid,

    pub start_date: Date,
    pub end_date: Date,
    pub status: BookingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A booking as its requester sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingListingRecord {
    pub booking: BookingRecord,
    pub space_title: String,
}

/// A booking on one of the host's spaces, with who asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct HostBookingRecord {
    pub booking: BookingRecord,
    pub space_title: String,
    pub requester_first_name: String,
    pub requester_last_name: String,
    pub requester_email: String,
}
