//! SQLite adapter for the waitlist repository.
//!
//! Removal and position compaction run in one transaction so concurrent
//! removals can never leave duplicate or gapped positions behind.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{
    format_date, parse_date, parse_datetime, parse_optional_datetime, parse_optional_slot,
    parse_uuid,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{WaitlistEntry, WaitlistStatus};
use crate::domain::ports::WaitlistRepository;

#[derive(Clone)]
pub struct SqliteWaitlistRepository {
    pool: SqlitePool,
}

impl SqliteWaitlistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WaitlistRow {
    id: String,
    barber_id: String,
    date: String,
    time: Option<String>,
    customer_name: String,
    customer_email: String,
    status: String,
    position: i64,
    created_at: String,
    notified_at: Option<String>,
}

fn row_to_entry(row: WaitlistRow) -> DomainResult<WaitlistEntry> {
    Ok(WaitlistEntry {
        id: parse_uuid(&row.id)?,
        barber_id: parse_uuid(&row.barber_id)?,
        date: parse_date(&row.date)?,
        time: parse_optional_slot(row.time)?,
        customer_name: row.customer_name,
        customer_email: row.customer_email,
        status: WaitlistStatus::from_str(&row.status).unwrap_or(WaitlistStatus::Waiting),
        position: row.position,
        created_at: parse_datetime(&row.created_at)?,
        notified_at: parse_optional_datetime(row.notified_at)?,
    })
}

#[async_trait]
impl WaitlistRepository for SqliteWaitlistRepository {
    async fn insert(&self, entry: &WaitlistEntry) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO waitlist_entries
             (id, barber_id, date, time, customer_name, customer_email,
              status, position, created_at, notified_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(entry.id.to_string())
        .bind(entry.barber_id.to_string())
        .bind(format_date(entry.date))
        .bind(entry.time.map(|t| t.to_string()))
        .bind(&entry.customer_name)
        .bind(&entry.customer_email)
        .bind(entry.status.as_str())
        .bind(entry.position)
        .bind(entry.created_at.to_rfc3339())
        .bind(entry.notified_at.map(|t| t.to_rfc3339()))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<WaitlistEntry>> {
        let row: Option<WaitlistRow> =
            sqlx::query_as("SELECT * FROM waitlist_entries WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;
        row.map(row_to_entry).transpose()
    }

    async fn active_exists(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        customer_email: &str,
    ) -> DomainResult<bool> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM waitlist_entries
             WHERE barber_id = ? AND date = ? AND customer_email = ?
               AND status IN ('waiting', 'notified')",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .bind(customer_email)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0 > 0)
    }

    async fn max_position(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<i64> {
        let max: (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(position), 0) FROM waitlist_entries
             WHERE barber_id = ? AND date = ? AND status IN ('waiting', 'notified')",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .fetch_one(&self.pool)
        .await?;
        Ok(max.0)
    }

    async fn for_day(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<Vec<WaitlistEntry>> {
        let rows: Vec<WaitlistRow> = sqlx::query_as(
            "SELECT * FROM waitlist_entries
             WHERE barber_id = ? AND date = ?
             ORDER BY position",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(row_to_entry).collect()
    }

    async fn first_waiting(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Option<WaitlistEntry>> {
        let row: Option<WaitlistRow> = sqlx::query_as(
            "SELECT * FROM waitlist_entries
             WHERE barber_id = ? AND date = ? AND status = 'waiting'
             ORDER BY position
             LIMIT 1",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .fetch_optional(&self.pool)
        .await?;
        row.map(row_to_entry).transpose()
    }

    async fn mark_notified(&self, id: Uuid, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE waitlist_entries SET status = 'notified', notified_at = ?2
             WHERE id = ?1 AND status = 'waiting'",
        )
        .bind(id.to_string())
        .bind(at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return match self.get(id).await? {
                Some(entry) => Err(DomainError::ValidationFailed(format!(
                    "waitlist entry {id} is {}, not waiting",
                    entry.status.as_str()
                ))),
                None => Err(DomainError::WaitlistEntryNotFound(id)),
            };
        }
        Ok(())
    }

    async fn stale_notified(&self, cutoff: DateTime<Utc>) -> DomainResult<Vec<WaitlistEntry>> {
        let rows: Vec<WaitlistRow> = sqlx::query_as(
            "SELECT * FROM waitlist_entries
             WHERE status = 'notified' AND notified_at <= ?
             ORDER BY notified_at",
        )
        .bind(cutoff.to_rfc3339())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(row_to_entry).collect()
    }

    async fn remove_and_compact(
        &self,
        id: Uuid,
        terminal: WaitlistStatus,
    ) -> DomainResult<WaitlistEntry> {
        if !terminal.is_terminal() {
            return Err(DomainError::ValidationFailed(format!(
                "{} is not a terminal waitlist status",
                terminal.as_str()
            )));
        }

        let mut tx = self.pool.begin().await?;

        let row: Option<WaitlistRow> =
            sqlx::query_as("SELECT * FROM waitlist_entries WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&mut *tx)
                .await?;
        let mut entry = row
            .map(row_to_entry)
            .transpose()?
            .ok_or(DomainError::WaitlistEntryNotFound(id))?;

        if entry.status.is_terminal() {
            return Err(DomainError::ValidationFailed(format!(
                "waitlist entry {id} is already {}",
                entry.status.as_str()
            )));
        }

        sqlx::query("UPDATE waitlist_entries SET status = ?2 WHERE id = ?1")
            .bind(id.to_string())
            .bind(terminal.as_str())
            .execute(&mut *tx)
            .await?;

        // Keep remaining positions dense and 1-based.
        sqlx::query(
            "UPDATE waitlist_entries SET position = position - 1
             WHERE barber_id = ?1 AND date = ?2
               AND status IN ('waiting', 'notified')
               AND position > ?3",
        )
        .bind(entry.barber_id.to_string())
        .bind(format_date(entry.date))
        .bind(entry.position)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        entry.status = terminal;
        Ok(entry)
    }
}
