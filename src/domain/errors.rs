//! Domain errors for the trimline booking core.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors that can occur in the booking core.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Barber not found: {0}")]
    BarberNotFound(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("Closure not found: {0}")]
    ClosureNotFound(Uuid),

    #[error("Waitlist entry not found: {0}")]
    WaitlistEntryNotFound(Uuid),

    #[error("Invalid slot time: {0}")]
    InvalidSlot(String),

    #[error("Slot {time} on {date} is not available")]
    SlotTaken { date: NaiveDate, time: String },

    #[error("Customer {email} is already waitlisted for {barber_id} on {date}")]
    DuplicateWaitlistEntry {
        barber_id: Uuid,
        date: NaiveDate,
        email: String,
    },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience alias used throughout the domain and service layers.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
