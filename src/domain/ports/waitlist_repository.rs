//! Repository port for waitlist entries.
//!
//! Position compaction happens inside the repository so that the
//! renumbering is one transactional unit; two concurrent removals must
//! never produce duplicate positions.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{WaitlistEntry, WaitlistStatus};

/// Repository port for the waitlist queue.
#[async_trait]
pub trait WaitlistRepository: Send + Sync {
    /// Insert a new entry.
    async fn insert(&self, entry: &WaitlistEntry) -> DomainResult<()>;

    /// Get an entry by ID.
    async fn get(&self, id: Uuid) -> DomainResult<Option<WaitlistEntry>>;

    /// Whether the customer already has an active (waiting/notified)
    /// entry in the (barber, date) partition.
    async fn active_exists(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        customer_email: &str,
    ) -> DomainResult<bool>;

    /// Highest position currently assigned in the partition (0 if empty).
    async fn max_position(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<i64>;

    /// All entries in the partition ordered by position.
    async fn for_day(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<Vec<WaitlistEntry>>;

    /// The lowest-position waiting entry in the partition, if any.
    async fn first_waiting(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Option<WaitlistEntry>>;

    /// Transition an entry to notified, stamping `notified_at`.
    async fn mark_notified(&self, id: Uuid, at: DateTime<Utc>) -> DomainResult<()>;

    /// Entries notified at or before `cutoff` that are still notified.
    async fn stale_notified(&self, cutoff: DateTime<Utc>) -> DomainResult<Vec<WaitlistEntry>>;

    /// Move an active entry to a terminal status and decrement the
    /// position of every remaining active entry ranked behind it, all in
    /// one transaction. Returns the entry in its terminal state.
    async fn remove_and_compact(
        &self,
        id: Uuid,
        terminal: WaitlistStatus,
    ) -> DomainResult<WaitlistEntry>;
}
