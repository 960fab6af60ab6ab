//! Per-(barber, date) schedule record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::slots::Slot;

/// How a date is disposed for a barber.
///
/// Any open variant on a record overrides a recurring weekly closure for
/// that date; `OpenException` additionally records that the record was
/// deliberately created against a recurring closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayDisposition {
    /// Regular working day.
    Open,
    /// Working day explicitly opened on a normally-closed date.
    OpenException,
    /// Day off. Every slot is unavailable regardless of closures.
    ClosedDayOff,
}

impl DayDisposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::OpenException => "open_exception",
            Self::ClosedDayOff => "closed_day_off",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "open_exception" => Some(Self::OpenException),
            "closed_day_off" => Some(Self::ClosedDayOff),
            _ => None,
        }
    }

    /// Whether the day is open for work at all.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open | Self::OpenException)
    }
}

/// Who created a schedule record.
///
/// Horizon maintenance repairs only `Auto` records; `Manual` records are
/// never touched by the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleOrigin {
    Auto,
    Manual,
}

impl ScheduleOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

/// Explicit slot configuration for one barber on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub barber_id: Uuid,
    pub date: NaiveDate,
    pub disposition: DayDisposition,
    pub origin: ScheduleOrigin,
    /// Slots configured as bookable, ordered by time.
    pub available_slots: Vec<Slot>,
    /// Slots configured but deliberately blocked (distinct from booked).
    pub unavailable_slots: Vec<Slot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduleRecord {
    /// Default record created by horizon maintenance.
    pub fn auto(barber_id: Uuid, date: NaiveDate, available_slots: Vec<Slot>) -> Self {
        let now = Utc::now();
        Self {
            barber_id,
            date,
            disposition: DayDisposition::Open,
            origin: ScheduleOrigin::Auto,
            available_slots,
            unavailable_slots: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Record created by administrative action.
    pub fn manual(
        barber_id: Uuid,
        date: NaiveDate,
        disposition: DayDisposition,
        available_slots: Vec<Slot>,
    ) -> Self {
        let now = Utc::now();
        Self {
            barber_id,
            date,
            disposition,
            origin: ScheduleOrigin::Manual,
            available_slots,
            unavailable_slots: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Every slot ever configured for this date: the ordered union of
    /// available and unavailable slots. Blocked slots still render as
    /// present-but-blocked rather than absent.
    pub fn candidate_slots(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self
            .available_slots
            .iter()
            .chain(self.unavailable_slots.iter())
            .copied()
            .collect();
        slots.sort();
        slots.dedup();
        slots
    }

    /// Whether a slot is configured open: listed as available and not
    /// also listed as unavailable.
    pub fn is_slot_open(&self, slot: Slot) -> bool {
        self.available_slots.contains(&slot) && !self.unavailable_slots.contains(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(s: &str) -> Slot {
        s.parse().expect("valid slot")
    }

    fn record() -> ScheduleRecord {
        let mut rec = ScheduleRecord::auto(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 10, 30).unwrap(),
            vec![slot("09:00"), slot("09:30"), slot("10:00")],
        );
        rec.unavailable_slots = vec![slot("09:30"), slot("11:00")];
        rec
    }

    #[test]
    fn candidate_slots_union_is_sorted_and_unique() {
        let rec = record();
        assert_eq!(
            rec.candidate_slots(),
            vec![slot("09:00"), slot("09:30"), slot("10:00"), slot("11:00")]
        );
    }

    #[test]
    fn blocked_slot_is_not_open_even_if_listed_available() {
        let rec = record();
        assert!(rec.is_slot_open(slot("09:00")));
        assert!(!rec.is_slot_open(slot("09:30")));
        assert!(!rec.is_slot_open(slot("11:00")));
    }

    #[test]
    fn disposition_round_trips() {
        for d in [
            DayDisposition::Open,
            DayDisposition::OpenException,
            DayDisposition::ClosedDayOff,
        ] {
            assert_eq!(DayDisposition::from_str(d.as_str()), Some(d));
        }
        assert!(!DayDisposition::ClosedDayOff.is_open());
        assert!(DayDisposition::OpenException.is_open());
    }
}
