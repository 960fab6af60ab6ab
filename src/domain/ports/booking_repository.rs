//! Repository port for bookings.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::Booking;

/// Repository port for bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Get a booking by ID.
    async fn get(&self, id: Uuid) -> DomainResult<Option<Booking>>;

    /// All bookings for a (barber, date) pair, cancelled ones included.
    async fn for_day(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<Vec<Booking>>;

    /// Insert the booking only if its slot has no live booking. The
    /// conditional insert is atomic; losing the race surfaces
    /// [`crate::domain::errors::DomainError::SlotTaken`].
    async fn reserve_if_free(&self, booking: &Booking) -> DomainResult<()>;

    /// Cancel a booking and return it with its updated status. Fails if
    /// the booking is unknown or already cancelled.
    async fn cancel(&self, id: Uuid) -> DomainResult<Booking>;
}
