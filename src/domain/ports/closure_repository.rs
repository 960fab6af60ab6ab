//! Repository port for recurring closures, specific closures, and
//! removed-auto-closure tombstones.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ClosureType, RecurringClosure, SpecificClosure};

/// Repository port for the three closure concepts.
#[async_trait]
pub trait ClosureRepository: Send + Sync {
    /// The barber's standing weekly closure rule, if configured.
    async fn get_recurring(&self, barber_id: Uuid) -> DomainResult<Option<RecurringClosure>>;

    /// Set or replace the barber's weekly closure rule.
    async fn set_recurring(&self, closure: &RecurringClosure) -> DomainResult<()>;

    /// All specific closures for a (barber, date) pair.
    async fn specific_for_day(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<SpecificClosure>>;

    /// Get a specific closure by ID.
    async fn get_specific(&self, id: Uuid) -> DomainResult<Option<SpecificClosure>>;

    /// Insert a specific closure.
    async fn insert_specific(&self, closure: &SpecificClosure) -> DomainResult<()>;

    /// Delete a specific closure without leaving a tombstone. Used for
    /// human-created closures.
    async fn delete_specific(&self, id: Uuid) -> DomainResult<()>;

    /// Delete an automatic closure and write its tombstone in the same
    /// transaction, so maintenance never recreates it.
    async fn delete_specific_with_tombstone(&self, closure: &SpecificClosure) -> DomainResult<()>;

    /// Whether a tombstone exists for (barber, date, type).
    async fn has_tombstone(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        closure_type: ClosureType,
    ) -> DomainResult<bool>;

    /// Whether a system-created closure of this type already exists for
    /// (barber, date). Maintenance uses this to avoid duplicates.
    async fn has_auto_closure(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        closure_type: ClosureType,
    ) -> DomainResult<bool>;
}
