//! SQLite adapter for the booking repository.
//!
//! Slot exclusivity is enforced by a partial unique index on
//! (barber_id, date, time) over non-cancelled rows, which makes
//! reserve-if-free a single atomic insert.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{format_date, parse_date, parse_datetime, parse_slot, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Booking, BookingStatus};
use crate::domain::ports::BookingRepository;

#[derive(Clone)]
pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: String,
    barber_id: String,
    date: String,
    time: String,
    customer_name: String,
    customer_email: String,
    status: String,
    created_at: String,
    updated_at: String,
}

fn row_to_booking(row: BookingRow) -> DomainResult<Booking> {
    Ok(Booking {
        id: parse_uuid(&row.id)?,
        barber_id: parse_uuid(&row.barber_id)?,
        date: parse_date(&row.date)?,
        time: parse_slot(&row.time)?,
        customer_name: row.customer_name,
        customer_email: row.customer_email,
        status: BookingStatus::from_str(&row.status).unwrap_or(BookingStatus::Confirmed),
        created_at: parse_datetime(&row.created_at)?,
        updated_at: parse_datetime(&row.updated_at)?,
    })
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn get(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as("SELECT * FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_booking).transpose()
    }

    async fn for_day(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            "SELECT * FROM bookings WHERE barber_id = ? AND date = ? ORDER BY time",
        )
        .bind(barber_id.to_string())
        .bind(format_date(date))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(row_to_booking).collect()
    }

    async fn reserve_if_free(&self, booking: &Booking) -> DomainResult<()> {
        let result = sqlx::query(
            "INSERT INTO bookings
             (id, barber_id, date, time, customer_name, customer_email,
              status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(booking.id.to_string())
        .bind(booking.barber_id.to_string())
        .bind(format_date(booking.date))
        .bind(booking.time.to_string())
        .bind(&booking.customer_name)
        .bind(&booking.customer_email)
        .bind(booking.status.as_str())
        .bind(booking.created_at.to_rfc3339())
        .bind(booking.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DomainError::SlotTaken {
                    date: booking.date,
                    time: booking.time.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn cancel(&self, id: Uuid) -> DomainResult<Booking> {
        let result = sqlx::query(
            "UPDATE bookings SET status = 'cancelled', updated_at = ?2
             WHERE id = ?1 AND status != 'cancelled'",
        )
        .bind(id.to_string())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return match self.get(id).await? {
                Some(_) => Err(DomainError::ValidationFailed(format!(
                    "booking {id} is already cancelled"
                ))),
                None => Err(DomainError::BookingNotFound(id)),
            };
        }

        self.get(id)
            .await?
            .ok_or(DomainError::BookingNotFound(id))
    }
}
