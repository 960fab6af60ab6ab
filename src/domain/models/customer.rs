//! Customer identity value used by bookings, waitlist entries, and
//! notification dispatch.

use serde::{Deserialize, Serialize};

/// A customer as seen by the booking core: a display name and the email
/// identity notifications are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
