//! Waitlist queue coordination.
//!
//! Entries form a dense, 1-based FIFO per (barber, date). When a booked
//! slot frees up the head of the queue is notified; the slot itself is
//! never held, so booking stays first-come-first-served.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Customer, WaitlistEntry, WaitlistStatus};
use crate::domain::ports::{
    BarberRepository, Clock, FreedSlotNotice, Notifier, WaitlistRepository,
};
use crate::domain::slots::Slot;

/// Service managing waitlist entries for freed slots.
pub struct WaitlistService {
    barbers: Arc<dyn BarberRepository>,
    waitlist: Arc<dyn WaitlistRepository>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    notified_ttl: Duration,
}

impl WaitlistService {
    pub fn new(
        barbers: Arc<dyn BarberRepository>,
        waitlist: Arc<dyn WaitlistRepository>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        notified_ttl_hours: i64,
    ) -> Self {
        Self {
            barbers,
            waitlist,
            notifier,
            clock,
            notified_ttl: Duration::hours(notified_ttl_hours),
        }
    }

    /// Join the queue for a (barber, date) pair. A customer can hold at
    /// most one active entry per partition.
    #[instrument(skip(self, customer), fields(customer = %customer.email), err)]
    pub async fn join(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        customer: Customer,
        preferred_time: Option<Slot>,
    ) -> DomainResult<WaitlistEntry> {
        self.barbers
            .get(barber_id)
            .await?
            .ok_or_else(|| DomainError::BarberNotFound(barber_id.to_string()))?;

        if self
            .waitlist
            .active_exists(barber_id, date, &customer.email)
            .await?
        {
            return Err(DomainError::DuplicateWaitlistEntry {
                barber_id,
                date,
                email: customer.email,
            });
        }

        let position = self.waitlist.max_position(barber_id, date).await? + 1;
        let entry = WaitlistEntry::new(barber_id, date, preferred_time, &customer, position);
        self.waitlist.insert(&entry).await?;

        info!(entry = %entry.id, position, "customer joined waitlist");
        Ok(entry)
    }

    /// Leave the queue. Remaining entries behind the departed one are
    /// renumbered so positions stay dense and 1-based.
    #[instrument(skip(self), err)]
    pub async fn leave(&self, entry_id: Uuid) -> DomainResult<WaitlistEntry> {
        let entry = self
            .waitlist
            .remove_and_compact(entry_id, WaitlistStatus::Cancelled)
            .await?;
        info!(entry = %entry.id, "customer left waitlist");
        Ok(entry)
    }

    /// A booked slot freed up: notify the head of the queue, if any.
    ///
    /// Selection is strictly by position; an entry's preferred time is
    /// advisory payload only. Notification failures are logged and do
    /// not roll back the entry's transition to notified.
    #[instrument(skip(self), err)]
    pub async fn notify_freed_slot(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        time: Slot,
    ) -> DomainResult<Option<WaitlistEntry>> {
        let barber = self
            .barbers
            .get(barber_id)
            .await?
            .ok_or_else(|| DomainError::BarberNotFound(barber_id.to_string()))?;

        let Some(head) = self.waitlist.first_waiting(barber_id, date).await? else {
            return Ok(None);
        };

        let now = self.clock.now();
        self.waitlist.mark_notified(head.id, now).await?;

        let notice = FreedSlotNotice {
            barber_name: barber.name,
            date,
            time,
        };
        if let Err(e) = self.notifier.notify(&head.customer(), &notice).await {
            warn!(entry = %head.id, "freed-slot notification failed: {e}");
        }

        info!(entry = %head.id, position = head.position, "waitlist head notified");
        self.waitlist
            .get(head.id)
            .await?
            .ok_or(DomainError::WaitlistEntryNotFound(head.id))
            .map(Some)
    }

    /// The customer completed a booking after being notified.
    #[instrument(skip(self), err)]
    pub async fn mark_booked(&self, entry_id: Uuid) -> DomainResult<WaitlistEntry> {
        let entry = self
            .waitlist
            .get(entry_id)
            .await?
            .ok_or(DomainError::WaitlistEntryNotFound(entry_id))?;
        if entry.status != WaitlistStatus::Notified {
            return Err(DomainError::ValidationFailed(format!(
                "waitlist entry {entry_id} is {}, not notified",
                entry.status.as_str()
            )));
        }
        self.waitlist
            .remove_and_compact(entry_id, WaitlistStatus::Booked)
            .await
    }

    /// Cancel entries that have sat in notified state longer than the
    /// configured TTL, so they stop occupying queue positions. Returns
    /// the number expired.
    #[instrument(skip(self), err)]
    pub async fn expire_notified(&self) -> DomainResult<usize> {
        let cutoff = self.clock.now() - self.notified_ttl;
        let stale = self.waitlist.stale_notified(cutoff).await?;
        let mut expired = 0;

        for entry in stale {
            match self
                .waitlist
                .remove_and_compact(entry.id, WaitlistStatus::Cancelled)
                .await
            {
                Ok(_) => {
                    info!(entry = %entry.id, "expired stale notified entry");
                    expired += 1;
                }
                Err(e) => warn!(entry = %entry.id, "expiry failed: {e}"),
            }
        }

        Ok(expired)
    }

    /// The queue for a (barber, date) pair, ordered by position.
    pub async fn entries_for_day(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<WaitlistEntry>> {
        self.waitlist.for_day(barber_id, date).await
    }
}
