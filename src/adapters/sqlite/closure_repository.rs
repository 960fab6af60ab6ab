//! SQLite adapter for the closure repository.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{format_date, parse_date, parse_datetime, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    ClosureOrigin, ClosureType, RecurringClosure, RemovedAutoClosure, SpecificClosure,
};
use crate::domain::ports::ClosureRepository;

#[derive(Clone)]
pub struct SqliteClosureRepository {
    pool: SqlitePool,
}

impl SqliteClosureRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RecurringRow {
    barber_id: String,
    closed_weekdays: String,
    updated_at: String,
}

fn row_to_recurring(row: RecurringRow) -> DomainResult<RecurringClosure> {
    let closed_weekdays: BTreeSet<u8> = serde_json::from_str(&row.closed_weekdays)
        .map_err(|e| DomainError::SerializationError(format!("closed_weekdays: {e}")))?;
    Ok(RecurringClosure {
        barber_id: parse_uuid(&row.barber_id)?,
        closed_weekdays,
        updated_at: parse_datetime(&row.updated_at)?,
    })
}

#[derive(sqlx::FromRow)]
struct SpecificRow {
    id: String,
    barber_id: String,
    date: String,
    closure_type: String,
    reason: String,
    created_by: String,
    created_at: String,
}

fn row_to_specific(row: SpecificRow) -> DomainResult<SpecificClosure> {
    let closure_type = ClosureType::from_str(&row.closure_type)
        .ok_or_else(|| DomainError::SerializationError(format!("closure_type: {}", row.closure_type)))?;
    let created_by = ClosureOrigin::from_str(&row.created_by)
        .ok_or_else(|| DomainError::SerializationError(format!("created_by: {}", row.created_by)))?;
    Ok(SpecificClosure {
        id: parse_uuid(&row.id)?,
        barber_id: parse_uuid(&row.barber_id)?,
        date: parse_date(&row.date)?,
        closure_type,
        reason: row.reason,
        created_by,
        created_at: parse_datetime(&row.created_at)?,
    })
}

#[async_trait]
impl ClosureRepository for SqliteClosureRepository {
    async fn get_recurring(&self, barber_id: Uuid) -> DomainResult<Option<RecurringClosure>> {
        let row: Option<RecurringRow> =
            sqlx::query_as("SELECT * FROM recurring_closures WHERE barber_id = ?")
                .bind(barber_id.to_string())
                .fetch_optional(&self.pool)
                .await?;
        row.map(row_to_recurring).transpose()
    }

    async fn set_recurring(&self, closure: &RecurringClosure) -> DomainResult<()> {
        let weekdays = serde_json::to_string(&closure.closed_weekdays)?;
        sqlx::query(
            "INSERT INTO recurring_closures (barber_id, closed_weekdays, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (barber_id) DO UPDATE SET
                 closed_weekdays = excluded.closed_weekdays,
                 updated_at = excluded.updated_at",
        )
        .bind(closure.barber_id.to_string())
        .bind(&weekdays)
        .bind(closure.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn specific_for_day(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<SpecificClosure>> {
        let rows: Vec<SpecificRow> = sqlx::query_as(
            "SELECT * FROM specific_closures
             WHERE barber_id = ? AND date = ?
             ORDER BY created_at",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(row_to_specific).collect()
    }

    async fn get_specific(&self, id: Uuid) -> DomainResult<Option<SpecificClosure>> {
        let row: Option<SpecificRow> =
            sqlx::query_as("SELECT * FROM specific_closures WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;
        row.map(row_to_specific).transpose()
    }

    async fn insert_specific(&self, closure: &SpecificClosure) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO specific_closures
             (id, barber_id, date, closure_type, reason, created_by, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(closure.id.to_string())
        .bind(closure.barber_id.to_string())
        .bind(format_date(closure.date))
        .bind(closure.closure_type.as_str())
        .bind(&closure.reason)
        .bind(closure.created_by.as_str())
        .bind(closure.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_specific(&self, id: Uuid) -> DomainResult<()> {
        sqlx::query("DELETE FROM specific_closures WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_specific_with_tombstone(&self, closure: &SpecificClosure) -> DomainResult<()> {
        let tombstone = RemovedAutoClosure::for_closure(closure);
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM specific_closures WHERE id = ?")
            .bind(closure.id.to_string())
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO removed_auto_closures (barber_id, date, closure_type, removed_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (barber_id, date, closure_type) DO NOTHING",
        )
        .bind(tombstone.barber_id.to_string())
        .bind(format_date(tombstone.date))
        .bind(tombstone.closure_type.as_str())
        .bind(tombstone.removed_at.to_rfc3339())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn has_tombstone(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        closure_type: ClosureType,
    ) -> DomainResult<bool> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM removed_auto_closures
             WHERE barber_id = ? AND date = ? AND closure_type = ?",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .bind(closure_type.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0 > 0)
    }

    async fn has_auto_closure(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        closure_type: ClosureType,
    ) -> DomainResult<bool> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM specific_closures
             WHERE barber_id = ? AND date = ? AND closure_type = ?
               AND created_by IN ('system', 'system_auto')",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .bind(closure_type.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0 > 0)
    }
}
