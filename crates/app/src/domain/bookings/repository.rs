//! Bookings Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    bookings::{
        data::NewBooking,
        records::{
            BookingListingRecord, BookingRecord, BookingStatus, BookingUuid, HostBookingRecord,
        },
    },
    spaces::records::SpaceUuid,
    users::records::UserUuid,
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const GET_BOOKING_SQL: &str = include_str!("sql/get_booking.sql");
const UPDATE_BOOKING_STATUS_SQL: &str = include_str!("sql/update_booking_status.sql");
const LIST_REQUESTER_BOOKINGS_SQL: &str = include_str!("sql/list_requester_bookings.sql");
const LIST_HOST_BOOKINGS_SQL: &str = include_str!("sql/list_host_bookings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingsRepository;

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        requester: UserUuid,
        booking: NewBooking,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(booking.uuid.into_uuid())
            .bind(booking.space_uuid.into_uuid())
            .bind(requester.into_uuid())
            .bind(SqlxDate::from(booking.start_date))
            .bind(SqlxDate::from(booking.end_date))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(GET_BOOKING_SQL)
            .bind(booking.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking: BookingUuid,
        status: BookingStatus,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(UPDATE_BOOKING_STATUS_SQL)
            .bind(booking.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_requester_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        requester: UserUuid,
    ) -> Result<Vec<BookingListingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingListingRecord>(LIST_REQUESTER_BOOKINGS_SQL)
            .bind(requester.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_host_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        host: UserUuid,
    ) -> Result<Vec<HostBookingRecord>, sqlx::Error> {
        query_as::<Postgres, HostBookingRecord>(LIST_HOST_BOOKINGS_SQL)
            .bind(host.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("booking_status")?;

        let status = status
            .parse::<BookingStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "booking_status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("booking_id")?),
            space_uuid: SpaceUuid::from_uuid(row.try_get("space_id")?),
            requester_uuid: UserUuid::from_uuid(row.try_get("requester_id")?),
            start_date: row.try_get::<SqlxDate, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxDate, _>("end_date")?.to_jiff(),
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for BookingListingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            booking: BookingRecord::from_row(row)?,
            space_title: row.try_get("space_title")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for HostBookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            booking: BookingRecord::from_row(row)?,
            space_title: row.try_get("space_title")?,
            requester_first_name: row.try_get("requester_first_name")?,
            requester_last_name: row.try_get("requester_last_name")?,
            requester_email: row.try_get("requester_email")?,
        })
    }
}
