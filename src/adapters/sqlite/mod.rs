//! SQLite adapters for the trimline booking core.

pub mod barber_repository;
pub mod booking_repository;
pub mod closure_repository;
pub mod connection;
pub mod migrations;
pub mod schedule_repository;
pub mod waitlist_repository;

pub use barber_repository::SqliteBarberRepository;
pub use booking_repository::SqliteBookingRepository;
pub use closure_repository::SqliteClosureRepository;
pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError, PoolConfig};
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};
pub use schedule_repository::SqliteScheduleRepository;
pub use waitlist_repository::SqliteWaitlistRepository;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::warn;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slots::Slot;

/// Open the configured database and bring its schema up to date.
pub async fn initialize_database(database_url: &str) -> DomainResult<SqlitePool> {
    let pool = create_pool(database_url, None)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
    Migrator::new(pool.clone())
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
    Ok(pool)
}

/// Parse a UUID string from a row field.
pub fn parse_uuid(s: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| DomainError::SerializationError(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date from a row field.
pub fn parse_date(s: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DomainError::SerializationError(e.to_string()))
}

/// Format a date the way it is persisted.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an RFC3339 timestamp from a row field.
pub fn parse_datetime(s: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map_err(|e| DomainError::SerializationError(e.to_string()))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse an optional RFC3339 timestamp from a row field.
pub fn parse_optional_datetime(s: Option<String>) -> DomainResult<Option<DateTime<Utc>>> {
    s.map(|s| parse_datetime(&s)).transpose()
}

/// Parse an `HH:MM` slot from a row field.
pub fn parse_slot(s: &str) -> DomainResult<Slot> {
    s.parse()
}

/// Parse an optional `HH:MM` slot from a row field.
pub fn parse_optional_slot(s: Option<String>) -> DomainResult<Option<Slot>> {
    s.map(|s| s.parse()).transpose()
}

/// Parse a persisted JSON slot list.
///
/// Malformed payloads fail safe to an empty set ("no availability")
/// instead of erroring the whole read path.
pub fn parse_slot_list(context: &str, raw: &str) -> Vec<Slot> {
    match serde_json::from_str::<Vec<Slot>>(raw) {
        Ok(slots) => slots,
        Err(e) => {
            warn!("malformed slot list for {context}: {e}; treating as empty");
            Vec::new()
        }
    }
}

/// Serialize a slot list the way it is persisted.
pub fn format_slot_list(slots: &[Slot]) -> DomainResult<String> {
    Ok(serde_json::to_string(slots)?)
}
