//! Slot grid primitives.
//!
//! A slot is a fixed 30-minute booking unit keyed by its start time.
//! The weekday templates here are the default day shape used whenever no
//! explicit schedule record exists for a date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Slots starting at or after this hour belong to the afternoon block.
pub const AFTERNOON_BOUNDARY_HOUR: u32 = 14;

/// A 30-minute booking unit within a working day, keyed by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slot(NaiveTime);

impl Slot {
    /// Build a slot from hour and minute. Minutes must fall on a
    /// 30-minute boundary.
    pub fn new(hour: u32, minute: u32) -> Result<Self, DomainError> {
        if minute != 0 && minute != 30 {
            return Err(DomainError::InvalidSlot(format!("{hour:02}:{minute:02}")));
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidSlot(format!("{hour:02}:{minute:02}")))
    }

    /// Start hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Start minute (0 or 30).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Whether the slot falls in the morning block.
    pub fn is_morning(&self) -> bool {
        self.hour() < AFTERNOON_BOUNDARY_HOUR
    }

    /// The underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for Slot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| DomainError::InvalidSlot(s.to_string()))?;
        if time.minute() != 0 && time.minute() != 30 {
            return Err(DomainError::InvalidSlot(s.to_string()));
        }
        Ok(Self(time))
    }
}

impl TryFrom<String> for Slot {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.to_string()
    }
}

/// Whether the shop as a whole is closed on this date (Sundays).
pub fn shop_closed(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Weekday as a 0-6 index with Sunday = 0, matching the persisted
/// recurring-closure representation.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Default slot grid for a weekday.
///
/// - Sunday: empty (shop-wide closed day).
/// - Monday: 09:00-12:30 and 15:00-18:00.
/// - Tuesday-Friday: 09:00-12:30 and 15:00-17:30.
/// - Saturday: 09:00-12:30 and 14:30-16:30 (closes at 17:00; the
///   closing-boundary slot is not bookable).
pub fn template(weekday: Weekday) -> Vec<Slot> {
    let mut slots = match weekday {
        Weekday::Sun => return Vec::new(),
        _ => grid((9, 0), (12, 30)),
    };
    match weekday {
        Weekday::Mon => slots.extend(grid((15, 0), (18, 0))),
        Weekday::Sat => slots.extend(grid((14, 30), (16, 30))),
        _ => slots.extend(grid((15, 0), (17, 30))),
    }
    slots
}

/// Inclusive 30-minute slot range.
fn grid(from: (u32, u32), to: (u32, u32)) -> Vec<Slot> {
    let (mut hour, mut minute) = from;
    let mut out = Vec::new();
    loop {
        out.push(Slot::new(hour, minute).expect("slot grid times are valid"));
        if (hour, minute) == to {
            break;
        }
        minute += 30;
        if minute == 60 {
            minute = 0;
            hour += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(s: &str) -> Slot {
        s.parse().expect("valid slot")
    }

    #[test]
    fn sunday_template_is_empty() {
        assert!(template(Weekday::Sun).is_empty());
    }

    #[test]
    fn monday_afternoon_runs_until_eighteen() {
        let slots = template(Weekday::Mon);
        assert_eq!(slots.len(), 15);
        assert_eq!(*slots.last().unwrap(), slot("18:00"));
    }

    #[test]
    fn midweek_template_shape() {
        let slots = template(Weekday::Wed);
        assert_eq!(slots.len(), 14);
        assert_eq!(slots[0], slot("09:00"));
        assert_eq!(slots[7], slot("12:30"));
        assert_eq!(slots[8], slot("15:00"));
        assert_eq!(*slots.last().unwrap(), slot("17:30"));
    }

    #[test]
    fn saturday_afternoon_starts_early_and_skips_closing_slot() {
        let slots = template(Weekday::Sat);
        assert_eq!(slots[8], slot("14:30"));
        assert!(!slots.contains(&slot("17:30")));
        assert!(!slots.contains(&slot("17:00")));
        assert_eq!(*slots.last().unwrap(), slot("16:30"));
    }

    #[test]
    fn templates_are_sorted_and_unique() {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            let slots = template(weekday);
            let mut sorted = slots.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(slots, sorted);
        }
    }

    #[test]
    fn slot_parses_and_formats() {
        assert_eq!(slot("09:30").to_string(), "09:30");
        assert_eq!(slot("15:00").hour(), 15);
        assert!(slot("12:30").is_morning());
        assert!(!slot("14:30").is_morning());
    }

    #[test]
    fn slot_rejects_off_grid_times() {
        assert!("09:15".parse::<Slot>().is_err());
        assert!("25:00".parse::<Slot>().is_err());
        assert!("garbage".parse::<Slot>().is_err());
    }

    #[test]
    fn shop_closed_only_on_sundays() {
        let sunday = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert!(shop_closed(sunday));
        assert!(!shop_closed(monday));
    }
}
