//! Barber domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A barber who can be booked. Provisioned administratively; only the
/// active flag changes once schedules or bookings reference the barber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barber {
    pub id: Uuid,
    /// Display name shown to customers.
    pub name: String,
    /// Contact email, unique. Auto-closure rules are keyed by it.
    pub email: String,
    /// Inactive barbers are skipped by horizon maintenance and cannot
    /// be booked.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Barber {
    /// Create a new active barber.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
