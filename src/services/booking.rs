//! Booking flow: reserve-if-free creation and cancellation with
//! waitlist hand-off.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Booking, Customer};
use crate::domain::ports::BookingRepository;
use crate::domain::slots::Slot;

use super::availability::AvailabilityService;
use super::waitlist::WaitlistService;

/// Creates and cancels bookings.
///
/// Creation checks resolved availability first, then relies on the
/// repository's atomic conditional insert — the availability check alone
/// is not race-safe under concurrent writers.
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    availability: Arc<AvailabilityService>,
    waitlist: Arc<WaitlistService>,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        availability: Arc<AvailabilityService>,
        waitlist: Arc<WaitlistService>,
    ) -> Self {
        Self {
            bookings,
            availability,
            waitlist,
        }
    }

    /// Book a slot for a customer.
    #[instrument(skip(self, customer), fields(customer = %customer.email), err)]
    pub async fn book(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        time: Slot,
        customer: Customer,
    ) -> DomainResult<Booking> {
        let day = self.availability.resolve(barber_id, date).await?;
        let open = day.iter().any(|s| s.time == time && s.available);
        if !open {
            return Err(DomainError::SlotTaken {
                date,
                time: time.to_string(),
            });
        }

        let booking = Booking::new(barber_id, date, time, &customer);
        self.bookings.reserve_if_free(&booking).await?;

        info!(booking = %booking.id, "slot booked");
        Ok(booking)
    }

    /// Cancel a booking and offer the freed slot to the waitlist head.
    #[instrument(skip(self), err)]
    pub async fn cancel(&self, booking_id: Uuid) -> DomainResult<Booking> {
        let booking = self.bookings.cancel(booking_id).await?;
        info!(booking = %booking.id, "booking cancelled");

        self.waitlist
            .notify_freed_slot(booking.barber_id, booking.date, booking.time)
            .await?;

        Ok(booking)
    }
}
