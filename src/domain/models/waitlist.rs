//! Waitlist entry domain model.
//!
//! Entries form a dense, 1-based FIFO per (barber, date) partition.
//! Positions are assigned at join time and compacted downward whenever an
//! entry leaves the queue.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::slots::Slot;

use super::customer::Customer;

/// Lifecycle status of a waitlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitlistStatus {
    /// Waiting for a slot to free up.
    Waiting,
    /// Told about a freed slot; still occupies its position until it
    /// books, leaves, or expires.
    Notified,
    /// Removed explicitly or expired.
    Cancelled,
    /// Completed a booking after notification.
    Booked,
}

impl WaitlistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Notified => "notified",
            Self::Cancelled => "cancelled",
            Self::Booked => "booked",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "waiting" => Some(Self::Waiting),
            "notified" => Some(Self::Notified),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            "booked" => Some(Self::Booked),
            _ => None,
        }
    }

    /// Active entries hold a queue position and block duplicate joins.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Waiting | Self::Notified)
    }

    /// Terminal entries never change again.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

/// One customer waiting for a slot with one barber on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub barber_id: Uuid,
    pub date: NaiveDate,
    /// Preferred time, advisory only. Notification order ignores it.
    pub time: Option<Slot>,
    pub customer_name: String,
    pub customer_email: String,
    pub status: WaitlistStatus,
    /// Dense 1-based rank within the (barber, date) partition.
    pub position: i64,
    pub created_at: DateTime<Utc>,
    /// Set when the entry transitions to `Notified`; drives expiry.
    pub notified_at: Option<DateTime<Utc>>,
}

impl WaitlistEntry {
    /// Create a waiting entry at the given position.
    pub fn new(
        barber_id: Uuid,
        date: NaiveDate,
        time: Option<Slot>,
        customer: &Customer,
        position: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            barber_id,
            date,
            time,
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            status: WaitlistStatus::Waiting,
            position,
            created_at: Utc::now(),
            notified_at: None,
        }
    }

    /// The customer behind this entry.
    pub fn customer(&self) -> Customer {
        Customer {
            name: self.customer_name.clone(),
            email: self.customer_email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_states_block_duplicates() {
        assert!(WaitlistStatus::Waiting.is_active());
        assert!(WaitlistStatus::Notified.is_active());
        assert!(WaitlistStatus::Cancelled.is_terminal());
        assert!(WaitlistStatus::Booked.is_terminal());
    }

    #[test]
    fn status_round_trips() {
        for s in [
            WaitlistStatus::Waiting,
            WaitlistStatus::Notified,
            WaitlistStatus::Cancelled,
            WaitlistStatus::Booked,
        ] {
            assert_eq!(WaitlistStatus::from_str(s.as_str()), Some(s));
        }
    }
}
