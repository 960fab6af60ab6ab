//! Availability resolution.
//!
//! Combines the weekday slot template, per-date schedule records, the
//! three closure concepts, and live bookings into a per-slot verdict for
//! one (barber, date) pair. Read-only and side-effect free.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ClosureType, DayDisposition};
use crate::domain::ports::{
    BarberRepository, BookingRepository, ClosureRepository, ScheduleRepository,
};
use crate::domain::slots::{self, Slot};

/// Verdict for one slot of the day.
#[derive(Debug, Clone, Serialize)]
pub struct SlotAvailability {
    pub time: Slot,
    pub available: bool,
}

/// Resolves bookable slots for a (barber, date) pair.
pub struct AvailabilityService {
    barbers: Arc<dyn BarberRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    closures: Arc<dyn ClosureRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl AvailabilityService {
    pub fn new(
        barbers: Arc<dyn BarberRepository>,
        schedules: Arc<dyn ScheduleRepository>,
        closures: Arc<dyn ClosureRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            barbers,
            schedules,
            closures,
            bookings,
        }
    }

    /// Resolve the slot list for a barber on a date.
    ///
    /// The candidate set comes from the schedule record when one exists
    /// (blocked slots included, so they render present-but-blocked) and
    /// from the weekday template otherwise. A record with an open
    /// disposition is an exceptional opening: the recurring weekly
    /// closure is ignored and only specific closures apply. Booked slots
    /// are subtracted last.
    #[instrument(skip(self), err)]
    pub async fn resolve(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<SlotAvailability>> {
        self.barbers
            .get(barber_id)
            .await?
            .ok_or_else(|| DomainError::BarberNotFound(barber_id.to_string()))?;

        if slots::shop_closed(date) {
            return Ok(Vec::new());
        }

        let schedule = self.schedules.get(barber_id, date).await?;
        let exceptional_opening = schedule
            .as_ref()
            .is_some_and(|s| s.disposition.is_open());

        let mut day: Vec<SlotAvailability> = match &schedule {
            Some(record) => record
                .candidate_slots()
                .into_iter()
                .map(|time| SlotAvailability {
                    time,
                    available: record.is_slot_open(time),
                })
                .collect(),
            None => slots::template(date.weekday())
                .into_iter()
                .map(|time| SlotAvailability {
                    time,
                    available: true,
                })
                .collect(),
        };

        // A day off is authoritative: nothing on it is bookable.
        if schedule
            .as_ref()
            .is_some_and(|s| s.disposition == DayDisposition::ClosedDayOff)
        {
            for slot in &mut day {
                slot.available = false;
            }
        }

        if !exceptional_opening {
            if let Some(recurring) = self.closures.get_recurring(barber_id).await? {
                if recurring.is_closed_on(date.weekday()) {
                    for slot in &mut day {
                        slot.available = false;
                    }
                }
            }
        }

        for closure in self.closures.specific_for_day(barber_id, date).await? {
            apply_closure(&mut day, closure.closure_type);
        }

        for booking in self.bookings.for_day(barber_id, date).await? {
            if booking.status.consumes_slot() {
                if let Some(slot) = day.iter_mut().find(|s| s.time == booking.time) {
                    slot.available = false;
                }
            }
        }

        Ok(day)
    }
}

fn apply_closure(day: &mut [SlotAvailability], closure_type: ClosureType) {
    for slot in day {
        if closure_type.blocks(slot.time) {
            slot.available = false;
        }
    }
}
