//! Bookings service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, instrument};

use crate::{
    database::Db,
    domain::{
        bookings::{
            data::NewBooking,
            errors::BookingsServiceError,
            records::{
                BookingListingRecord, BookingRecord, BookingStatus, BookingUuid,
                HostBookingRecord,
            },
            repository::PgBookingsRepository,
        },
        spaces::repository::PgSpacesRepository,
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    db: Db,
    repository: PgBookingsRepository,
    spaces_repository: PgSpacesRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBookingsRepository::new(),
            spaces_repository: PgSpacesRepository::new(),
        }
    }
}

/// Requesters may only cancel; every other change belongs to the host.
fn authorize_status_change(
    booking: &BookingRecord,
    host: UserUuid,
    actor: UserUuid,
    status: BookingStatus,
) -> Result<(), BookingsServiceError> {
    let cancels_own_request = status == BookingStatus::Canceled && booking.requester_uuid == actor;

    if cancels_own_request || host == actor {
        Ok(())
    } else {
        Err(BookingsServiceError::Forbidden)
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    #[instrument(skip(self, booking), fields(booking = %booking.uuid, space = %booking.space_uuid))]
    async fn create_booking(
        &self,
        requester: UserUuid,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError> {
        if booking.end_date <= booking.start_date {
            return Err(BookingsServiceError::InvalidDates);
        }

        let mut tx = self.db.begin().await?;

        let space = self
            .spaces_repository
            .get_space(&mut tx, booking.space_uuid)
            .await
            .map_err(BookingsServiceError::from_space_lookup)?;

        if space.is_hosted_by(requester) {
            return Err(BookingsServiceError::OwnSpace);
        }

        let created = self
            .repository
            .create_booking(&mut tx, requester, booking)
            .await?;

        tx.commit().await?;

        info!("booking requested");

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        booking: BookingUuid,
        actor: UserUuid,
        status: BookingStatus,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.repository.get_booking(&mut tx, booking).await?;

        let host = self
            .spaces_repository
            .get_space_host(&mut tx, existing.space_uuid)
            .await
            .map_err(BookingsServiceError::from_space_lookup)?;

        authorize_status_change(&existing, host, actor, status)?;

        let updated = self
            .repository
            .update_status(&mut tx, booking, status)
            .await?;

        tx.commit().await?;

        info!(from = %existing.status, to = %updated.status, "booking status changed");

        Ok(updated)
    }

    async fn get_booking(
        &self,
        booking: BookingUuid,
        actor: UserUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let booking = self.repository.get_booking(&mut tx, booking).await?;

        let host = self
            .spaces_repository
            .get_space_host(&mut tx, booking.space_uuid)
            .await
            .map_err(BookingsServiceError::from_space_lookup)?;

        tx.commit().await?;

        if booking.requester_uuid != actor && host != actor {
            return Err(BookingsServiceError::Forbidden);
        }

        Ok(booking)
    }

    async fn list_requester_bookings(
        &self,
        requester: UserUuid,
    ) -> Result<Vec<BookingListingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let bookings = self
            .repository
            .list_requester_bookings(&mut tx, requester)
            .await?;

        tx.commit().await?;

        Ok(bookings)
    }

    async fn list_host_bookings(
        &self,
        host: UserUuid,
    ) -> Result<Vec<HostBookingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let bookings = self.repository.list_host_bookings(&mut tx, host).await?;

        tx.commit().await?;

        Ok(bookings)
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Requests a booking of someone else's space. New bookings are pending.
    async fn create_booking(
        &self,
        requester: UserUuid,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Moves a booking to `status`. The requester may cancel; the space's
    /// host may set any status.
    async fn update_status(
        &self,
        booking: BookingUuid,
        actor: UserUuid,
        status: BookingStatus,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Retrieves a booking visible to its requester or the space's host.
    async fn get_booking(
        &self,
        booking: BookingUuid,
        actor: UserUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Lists the requester's bookings, latest start first.
    async fn list_requester_bookings(
        &self,
        requester: UserUuid,
    ) -> Result<Vec<BookingListingRecord>, BookingsServiceError>;

    /// Lists bookings on the host's spaces, latest start first.
    async fn list_host_bookings(
        &self,
        host: UserUuid,
    ) -> Result<Vec<HostBookingRecord>, BookingsServiceError>;
}
