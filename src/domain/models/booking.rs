//! Booking domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::slots::Slot;

use super::customer::Customer;

/// Status of a booking. Only non-cancelled bookings consume a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether this booking still occupies its slot.
    pub fn consumes_slot(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// A reservation of one slot for one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub barber_id: Uuid,
    pub date: NaiveDate,
    pub time: Slot,
    pub customer_name: String,
    pub customer_email: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Create a confirmed booking for a slot.
    pub fn new(barber_id: Uuid, date: NaiveDate, time: Slot, customer: &Customer) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            barber_id,
            date,
            time,
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }

    /// The customer who holds this booking.
    pub fn customer(&self) -> Customer {
        Customer {
            name: self.customer_name.clone(),
            email: self.customer_email.clone(),
        }
    }
}
