//! SQLite adapter for the schedule repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{
    format_date, format_slot_list, parse_date, parse_datetime, parse_slot_list, parse_uuid,
};
use crate::domain::errors::DomainResult;
use crate::domain::models::{DayDisposition, ScheduleOrigin, ScheduleRecord};
use crate::domain::ports::ScheduleRepository;

#[derive(Clone)]
pub struct SqliteScheduleRepository {
    pool: SqlitePool,
}

impl SqliteScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ScheduleRow {
    barber_id: String,
    date: String,
    disposition: String,
    origin: String,
    available_slots: String,
    unavailable_slots: String,
    created_at: String,
    updated_at: String,
}

fn row_to_record(row: ScheduleRow) -> DomainResult<ScheduleRecord> {
    let context = format!("schedule {}/{}", row.barber_id, row.date);
    Ok(ScheduleRecord {
        barber_id: parse_uuid(&row.barber_id)?,
        date: parse_date(&row.date)?,
        disposition: DayDisposition::from_str(&row.disposition).unwrap_or(DayDisposition::Open),
        origin: ScheduleOrigin::from_str(&row.origin).unwrap_or(ScheduleOrigin::Auto),
        available_slots: parse_slot_list(&context, &row.available_slots),
        unavailable_slots: parse_slot_list(&context, &row.unavailable_slots),
        created_at: parse_datetime(&row.created_at)?,
        updated_at: parse_datetime(&row.updated_at)?,
    })
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepository {
    async fn get(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<Option<ScheduleRecord>> {
        let row: Option<ScheduleRow> =
            sqlx::query_as("SELECT * FROM schedule_records WHERE barber_id = ? AND date = ?")
                .bind(barber_id.to_string())
                .bind(format_date(date))
                .fetch_optional(&self.pool)
                .await?;
        row.map(row_to_record).transpose()
    }

    async fn upsert(&self, record: &ScheduleRecord) -> DomainResult<()> {
        let available = format_slot_list(&record.available_slots)?;
        let unavailable = format_slot_list(&record.unavailable_slots)?;

        sqlx::query(
            "INSERT INTO schedule_records
             (barber_id, date, disposition, origin,
              available_slots, unavailable_slots, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT (barber_id, date) DO UPDATE SET
                 disposition = excluded.disposition,
                 origin = excluded.origin,
                 available_slots = excluded.available_slots,
                 unavailable_slots = excluded.unavailable_slots,
                 updated_at = excluded.updated_at",
        )
        .bind(record.barber_id.to_string())
        .bind(format_date(record.date))
        .bind(record.disposition.as_str())
        .bind(record.origin.as_str())
        .bind(&available)
        .bind(&unavailable)
        .bind(record.created_at.to_rfc3339())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_before(&self, cutoff: NaiveDate) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM schedule_records WHERE date < ?")
            .bind(format_date(cutoff))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
