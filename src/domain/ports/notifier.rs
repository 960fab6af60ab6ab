//! Notification port.
//!
//! Dispatch is fire-and-forget: the transport (push/SMS/email) lives
//! outside this core, and failures are logged by callers rather than
//! retried synchronously.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::errors::DomainResult;
use crate::domain::models::Customer;
use crate::domain::slots::Slot;

/// Payload telling a waitlisted customer that a slot has freed up.
///
/// Notification grants awareness only; the freed slot is not held and is
/// booked first-come-first-served.
#[derive(Debug, Clone, Serialize)]
pub struct FreedSlotNotice {
    pub barber_name: String,
    pub date: NaiveDate,
    pub time: Slot,
}

/// Outbound notification port.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Dispatch a freed-slot notice to a customer.
    async fn notify(&self, customer: &Customer, notice: &FreedSlotNotice) -> DomainResult<()>;
}

/// Notifier that drops every notice. Useful when running maintenance
/// jobs that must not page customers.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _customer: &Customer, _notice: &FreedSlotNotice) -> DomainResult<()> {
        Ok(())
    }
}
