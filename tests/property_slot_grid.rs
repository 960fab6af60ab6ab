//! Property tests for the slot grid: every template is sorted, unique,
//! and 30-minute aligned, and slot parsing round-trips.

use chrono::Weekday;
use proptest::prelude::*;

use trimline::domain::slots::template;
use trimline::Slot;

fn weekday_from_index(index: u8) -> Weekday {
    match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

proptest! {
    #[test]
    fn templates_are_sorted_unique_and_aligned(index in 0u8..7) {
        let slots = template(weekday_from_index(index));

        let mut sorted = slots.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&slots, &sorted);

        for slot in &slots {
            prop_assert!(slot.minute() == 0 || slot.minute() == 30);
            prop_assert!(slot.hour() >= 9 && slot.hour() <= 18);
        }
    }

    #[test]
    fn valid_slots_round_trip_through_text(hour in 0u32..24, half in 0u32..2) {
        let minute = half * 30;
        let slot = Slot::new(hour, minute).expect("on-grid slot");
        let parsed: Slot = slot.to_string().parse().expect("parse back");
        prop_assert_eq!(parsed, slot);
    }

    #[test]
    fn off_grid_minutes_are_rejected(hour in 0u32..24, minute in 0u32..60) {
        prop_assume!(minute != 0 && minute != 30);
        prop_assert!(Slot::new(hour, minute).is_err());
        let text = format!("{hour:02}:{minute:02}");
        prop_assert!(text.parse::<Slot>().is_err());
    }
}
