//! Closure domain models: recurring weekly closures, per-date specific
//! closures, and tombstones for removed automatic closures.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::slots::{weekday_index, Slot};

/// Which part of the day a specific closure removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureType {
    /// The whole day.
    Full,
    /// Slots before 14:00.
    Morning,
    /// Slots at or after 14:00.
    Afternoon,
}

impl ClosureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(Self::Full),
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            _ => None,
        }
    }

    /// Whether this closure blocks the given slot.
    pub fn blocks(&self, slot: Slot) -> bool {
        match self {
            Self::Full => true,
            Self::Morning => slot.is_morning(),
            Self::Afternoon => !slot.is_morning(),
        }
    }
}

/// Who created a specific closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureOrigin {
    /// Created by horizon maintenance from an auto-closure rule.
    SystemAuto,
    /// Created by another system process.
    System,
    /// Created by an administrator.
    Admin,
    /// Created manually (legacy imports, ad-hoc edits).
    Manual,
}

impl ClosureOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemAuto => "system_auto",
            Self::System => "system",
            Self::Admin => "admin",
            Self::Manual => "manual",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system_auto" | "system-auto" => Some(Self::SystemAuto),
            "system" => Some(Self::System),
            "admin" => Some(Self::Admin),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }

    /// Automatic closures leave a tombstone when deleted so maintenance
    /// never recreates them.
    pub fn is_automatic(&self) -> bool {
        matches!(self, Self::SystemAuto | Self::System)
    }
}

/// Standing weekly closure rule for one barber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringClosure {
    pub barber_id: Uuid,
    /// Closed weekdays as 0-6 indices with Sunday = 0.
    pub closed_weekdays: BTreeSet<u8>,
    pub updated_at: DateTime<Utc>,
}

impl RecurringClosure {
    pub fn new(barber_id: Uuid, closed_weekdays: BTreeSet<u8>) -> Self {
        Self {
            barber_id,
            closed_weekdays,
            updated_at: Utc::now(),
        }
    }

    /// Whether the barber is normally closed on this weekday.
    pub fn is_closed_on(&self, weekday: Weekday) -> bool {
        self.closed_weekdays.contains(&weekday_index(weekday))
    }
}

/// A per-date exception that removes availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecificClosure {
    pub id: Uuid,
    pub barber_id: Uuid,
    pub date: NaiveDate,
    pub closure_type: ClosureType,
    pub reason: String,
    pub created_by: ClosureOrigin,
    pub created_at: DateTime<Utc>,
}

impl SpecificClosure {
    pub fn new(
        barber_id: Uuid,
        date: NaiveDate,
        closure_type: ClosureType,
        reason: impl Into<String>,
        created_by: ClosureOrigin,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            barber_id,
            date,
            closure_type,
            reason: reason.into(),
            created_by,
            created_at: Utc::now(),
        }
    }
}

/// Tombstone recording that a human deleted an automatic closure.
///
/// Its existence stops horizon maintenance from ever recreating the same
/// (barber, date, type) closure. Never deleted automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedAutoClosure {
    pub barber_id: Uuid,
    pub date: NaiveDate,
    pub closure_type: ClosureType,
    pub removed_at: DateTime<Utc>,
}

impl RemovedAutoClosure {
    pub fn for_closure(closure: &SpecificClosure) -> Self {
        Self {
            barber_id: closure.barber_id,
            date: closure.date,
            closure_type: closure.closure_type,
            removed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(s: &str) -> Slot {
        s.parse().expect("valid slot")
    }

    #[test]
    fn morning_closure_blocks_before_fourteen() {
        assert!(ClosureType::Morning.blocks(slot("09:00")));
        assert!(ClosureType::Morning.blocks(slot("12:30")));
        assert!(!ClosureType::Morning.blocks(slot("14:30")));
    }

    #[test]
    fn afternoon_closure_blocks_from_fourteen() {
        assert!(!ClosureType::Afternoon.blocks(slot("12:30")));
        assert!(ClosureType::Afternoon.blocks(slot("14:30")));
        assert!(ClosureType::Afternoon.blocks(slot("17:30")));
    }

    #[test]
    fn full_closure_blocks_everything() {
        assert!(ClosureType::Full.blocks(slot("09:00")));
        assert!(ClosureType::Full.blocks(slot("17:30")));
    }

    #[test]
    fn recurring_closure_matches_weekday() {
        let closure = RecurringClosure::new(Uuid::new_v4(), BTreeSet::from([1, 4]));
        assert!(closure.is_closed_on(Weekday::Mon));
        assert!(closure.is_closed_on(Weekday::Thu));
        assert!(!closure.is_closed_on(Weekday::Sat));
    }

    #[test]
    fn only_system_closures_are_automatic() {
        assert!(ClosureOrigin::SystemAuto.is_automatic());
        assert!(ClosureOrigin::System.is_automatic());
        assert!(!ClosureOrigin::Admin.is_automatic());
        assert!(!ClosureOrigin::Manual.is_automatic());
    }
}
