//! Notification adapters.
//!
//! Real transports (push/SMS/email) live outside the core. The tracing
//! adapter is what the CLI wires in; the recording adapter backs tests.

use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::Customer;
use crate::domain::ports::{FreedSlotNotice, Notifier};

/// Notifier that logs each dispatch instead of sending it anywhere.
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, customer: &Customer, notice: &FreedSlotNotice) -> DomainResult<()> {
        info!(
            customer = %customer.email,
            barber = %notice.barber_name,
            date = %notice.date,
            time = %notice.time,
            "freed-slot notification dispatched"
        );
        Ok(())
    }
}

/// Notifier that records every dispatch for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(Customer, FreedSlotNotice)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything dispatched so far.
    pub fn sent(&self) -> Vec<(Customer, FreedSlotNotice)> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, customer: &Customer, notice: &FreedSlotNotice) -> DomainResult<()> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push((customer.clone(), notice.clone()));
        Ok(())
    }
}
