//! Schedule-horizon maintenance.
//!
//! Runs once per day (or on demand): extends per-(barber, date) schedule
//! records over a rolling window of future dates, materialises
//! automatic closures from the configured rule table, and retires stale
//! past records. Idempotent: a second run on the same day produces zero
//! net new writes, and removed-auto-closure tombstones guarantee a
//! human's deletion of an automatic closure survives every later run.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    AutoClosureRule, Barber, ClosureOrigin, DayDisposition, RecurringClosure, ScheduleOrigin,
    ScheduleRecord, SpecificClosure,
};
use crate::domain::ports::{BarberRepository, Clock, ClosureRepository, ScheduleRepository};
use crate::domain::slots::{self, weekday_index, Slot};

/// Counters for one maintenance run.
#[derive(Debug, Default, Serialize)]
pub struct HorizonReport {
    /// Schedule records created.
    pub created: u64,
    /// Auto records additively repaired (missing template slots restored).
    pub repaired: u64,
    /// Automatic closures created from rules.
    pub closures_created: u64,
    /// Past records retired.
    pub retired: u64,
    /// Per-pair failures. A failure never aborts the batch.
    pub errors: Vec<String>,
}

enum PairOutcome {
    Created,
    Repaired,
    Unchanged,
}

/// Daily batch maintaining the schedule/closure horizon.
pub struct HorizonService {
    barbers: Arc<dyn BarberRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    closures: Arc<dyn ClosureRepository>,
    clock: Arc<dyn Clock>,
    rules: Vec<AutoClosureRule>,
}

impl HorizonService {
    pub fn new(
        barbers: Arc<dyn BarberRepository>,
        schedules: Arc<dyn ScheduleRepository>,
        closures: Arc<dyn ClosureRepository>,
        clock: Arc<dyn Clock>,
        rules: Vec<AutoClosureRule>,
    ) -> Self {
        Self {
            barbers,
            schedules,
            closures,
            clock,
            rules,
        }
    }

    /// Maintain the next `horizon_days` days for every active barber,
    /// then retire records dated strictly before yesterday.
    #[instrument(skip(self), err)]
    pub async fn run(&self, horizon_days: u32) -> DomainResult<HorizonReport> {
        let today = self.clock.today();
        let mut report = HorizonReport::default();

        let barbers = self.barbers.list(true).await?;
        info!(
            barbers = barbers.len(),
            horizon_days, %today,
            "horizon maintenance starting"
        );

        for barber in &barbers {
            self.maintain_barber(barber, today, horizon_days, &mut report)
                .await;
        }

        if let Some(cutoff) = today.checked_sub_days(Days::new(1)) {
            match self.schedules.delete_before(cutoff).await {
                Ok(retired) => report.retired = retired,
                Err(e) => report.errors.push(format!("retention sweep: {e}")),
            }
        }

        info!(
            created = report.created,
            repaired = report.repaired,
            closures_created = report.closures_created,
            retired = report.retired,
            errors = report.errors.len(),
            "horizon maintenance finished"
        );
        Ok(report)
    }

    async fn maintain_barber(
        &self,
        barber: &Barber,
        today: NaiveDate,
        horizon_days: u32,
        report: &mut HorizonReport,
    ) {
        let recurring = match self.closures.get_recurring(barber.id).await {
            Ok(recurring) => recurring,
            Err(e) => {
                warn!(barber = %barber.email, "skipping barber: {e}");
                report.errors.push(format!("{}: {e}", barber.email));
                return;
            }
        };

        for date in horizon_dates(today, horizon_days) {
            // Default records on recurring-closed weekdays would read as
            // exceptional openings and void the recurring closure.
            if recurring
                .as_ref()
                .is_some_and(|r: &RecurringClosure| r.is_closed_on(date.weekday()))
            {
                continue;
            }

            match self.ensure_schedule(barber.id, date).await {
                Ok(PairOutcome::Created) => report.created += 1,
                Ok(PairOutcome::Repaired) => report.repaired += 1,
                Ok(PairOutcome::Unchanged) => {}
                Err(e) => {
                    warn!(barber = %barber.email, %date, "schedule maintenance failed: {e}");
                    report.errors.push(format!("{} {date}: {e}", barber.email));
                }
            }
        }

        for rule in self
            .rules
            .iter()
            .filter(|r| r.barber_email.eq_ignore_ascii_case(&barber.email))
        {
            for date in horizon_dates(today, horizon_days) {
                if rule
                    .weekday
                    .is_some_and(|w| w != weekday_index(date.weekday()))
                {
                    continue;
                }

                match self.ensure_auto_closure(barber.id, date, rule).await {
                    Ok(true) => report.closures_created += 1,
                    Ok(false) => {}
                    Err(e) => {
                        warn!(barber = %barber.email, %date, "auto closure failed: {e}");
                        report.errors.push(format!("{} {date}: {e}", barber.email));
                    }
                }
            }
        }
    }

    async fn ensure_schedule(&self, barber_id: Uuid, date: NaiveDate) -> DomainResult<PairOutcome> {
        match self.schedules.get(barber_id, date).await? {
            None => {
                let record =
                    ScheduleRecord::auto(barber_id, date, slots::template(date.weekday()));
                self.schedules.upsert(&record).await?;
                Ok(PairOutcome::Created)
            }
            Some(mut record)
                if record.origin == ScheduleOrigin::Auto
                    && record.disposition == DayDisposition::Open =>
            {
                let missing: Vec<Slot> = slots::template(date.weekday())
                    .into_iter()
                    .filter(|slot| {
                        !record.available_slots.contains(slot)
                            && !record.unavailable_slots.contains(slot)
                    })
                    .collect();

                if missing.is_empty() {
                    return Ok(PairOutcome::Unchanged);
                }

                // Additive repair only; configured slots are never removed.
                record.available_slots.extend(missing);
                record.available_slots.sort();
                record.available_slots.dedup();
                self.schedules.upsert(&record).await?;
                Ok(PairOutcome::Repaired)
            }
            Some(_) => Ok(PairOutcome::Unchanged),
        }
    }

    async fn ensure_auto_closure(
        &self,
        barber_id: Uuid,
        date: NaiveDate,
        rule: &AutoClosureRule,
    ) -> DomainResult<bool> {
        if self
            .closures
            .has_tombstone(barber_id, date, rule.closure_type)
            .await?
        {
            return Ok(false);
        }
        if self
            .closures
            .has_auto_closure(barber_id, date, rule.closure_type)
            .await?
        {
            return Ok(false);
        }

        let closure = SpecificClosure::new(
            barber_id,
            date,
            rule.closure_type,
            rule.reason.clone(),
            ClosureOrigin::SystemAuto,
        );
        self.closures.insert_specific(&closure).await?;
        Ok(true)
    }
}

/// The maintained dates: the next `horizon_days` days from `today`,
/// minus the shop-wide closed weekday.
fn horizon_dates(today: NaiveDate, horizon_days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..horizon_days)
        .filter_map(move |offset| today.checked_add_days(Days::new(u64::from(offset))))
        .filter(|date| !slots::shop_closed(*date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_dates_skip_sundays() {
        // 2025-10-27 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2025, 10, 27).unwrap();
        let dates: Vec<NaiveDate> = horizon_dates(monday, 14).collect();
        assert_eq!(dates.len(), 12);
        assert!(dates.iter().all(|d| d.weekday() != chrono::Weekday::Sun));
        assert_eq!(dates[0], monday);
    }
}
