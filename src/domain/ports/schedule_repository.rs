//! Repository port for per-(barber, date) schedule records.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::ScheduleRecord;

/// Repository port for schedule records.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Get the record for a (barber, date) pair, if any.
    async fn get(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<Option<ScheduleRecord>>;

    /// Insert or replace a record, keyed by (barber, date).
    async fn upsert(&self, record: &ScheduleRecord) -> DomainResult<()>;

    /// Delete all records dated strictly before `cutoff`. Returns the
    /// number of rows removed.
    async fn delete_before(&self, cutoff: NaiveDate) -> DomainResult<u64>;
}
