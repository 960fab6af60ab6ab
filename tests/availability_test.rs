//! Availability resolution integration tests.

mod common;

use std::collections::BTreeSet;

use chrono::Weekday;
use uuid::Uuid;

use common::{add_barber, date, setup_pool, slot, stores, Stores};
use trimline::domain::slots::template;
use trimline::{
    AvailabilityService, Booking, ClosureOrigin, ClosureType, Customer, DayDisposition,
    DomainError, RecurringClosure, ScheduleRecord, SpecificClosure,
};

fn service(stores: &Stores) -> AvailabilityService {
    AvailabilityService::new(
        stores.barbers.clone(),
        stores.schedules.clone(),
        stores.closures.clone(),
        stores.bookings.clone(),
    )
}

#[tokio::test]
async fn missing_record_falls_back_to_weekday_template() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    // 2025-10-30 is a Thursday.
    let day = service(&stores)
        .resolve(barber.id, date("2025-10-30"))
        .await
        .expect("resolve");

    let times: Vec<_> = day.iter().map(|s| s.time).collect();
    assert_eq!(times, template(Weekday::Thu));
    assert!(day.iter().all(|s| s.available));
}

#[tokio::test]
async fn unknown_barber_is_an_error_not_an_empty_day() {
    let pool = setup_pool().await;
    let stores = stores(&pool);

    let err = service(&stores)
        .resolve(Uuid::new_v4(), date("2025-10-30"))
        .await
        .expect_err("should fail");
    assert!(matches!(err, DomainError::BarberNotFound(_)));
}

#[tokio::test]
async fn sunday_resolves_to_no_slots() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    let day = service(&stores)
        .resolve(barber.id, date("2025-11-02"))
        .await
        .expect("resolve");
    assert!(day.is_empty());
}

#[tokio::test]
async fn recurring_closure_blocks_the_whole_weekday() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    stores
        .closures
        .set_recurring(&RecurringClosure::new(barber.id, BTreeSet::from([1])))
        .await
        .expect("set recurring");

    // 2025-11-03 is a Monday; no schedule record exists.
    let day = service(&stores)
        .resolve(barber.id, date("2025-11-03"))
        .await
        .expect("resolve");

    assert_eq!(day.len(), template(Weekday::Mon).len());
    assert!(day.iter().all(|s| !s.available));
}

#[tokio::test]
async fn exceptional_opening_overrides_recurring_closure() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    stores
        .closures
        .set_recurring(&RecurringClosure::new(barber.id, BTreeSet::from([1])))
        .await
        .expect("set recurring");

    let record = ScheduleRecord::manual(
        barber.id,
        date("2025-11-03"),
        DayDisposition::OpenException,
        vec![slot("15:00"), slot("15:30"), slot("16:00")],
    );
    stores.schedules.upsert(&record).await.expect("upsert");

    let day = service(&stores)
        .resolve(barber.id, date("2025-11-03"))
        .await
        .expect("resolve");

    let times: Vec<_> = day.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![slot("15:00"), slot("15:30"), slot("16:00")]);
    assert!(day.iter().all(|s| s.available));
}

#[tokio::test]
async fn full_closure_still_empties_an_exceptional_opening() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    stores
        .closures
        .set_recurring(&RecurringClosure::new(barber.id, BTreeSet::from([1])))
        .await
        .expect("set recurring");

    let record = ScheduleRecord::manual(
        barber.id,
        date("2025-11-03"),
        DayDisposition::OpenException,
        vec![slot("15:00"), slot("15:30")],
    );
    stores.schedules.upsert(&record).await.expect("upsert");

    let closure = SpecificClosure::new(
        barber.id,
        date("2025-11-03"),
        ClosureType::Full,
        "family emergency",
        ClosureOrigin::Admin,
    );
    stores
        .closures
        .insert_specific(&closure)
        .await
        .expect("insert closure");

    let day = service(&stores)
        .resolve(barber.id, date("2025-11-03"))
        .await
        .expect("resolve");

    assert_eq!(day.len(), 2);
    assert!(day.iter().all(|s| !s.available));
}

#[tokio::test]
async fn morning_closure_spares_afternoon_slots() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    let closure = SpecificClosure::new(
        barber.id,
        date("2025-10-30"),
        ClosureType::Morning,
        "supplier pickup",
        ClosureOrigin::Admin,
    );
    stores
        .closures
        .insert_specific(&closure)
        .await
        .expect("insert closure");

    let day = service(&stores)
        .resolve(barber.id, date("2025-10-30"))
        .await
        .expect("resolve");

    for s in &day {
        assert_eq!(s.available, !s.time.is_morning(), "slot {}", s.time);
    }
}

#[tokio::test]
async fn bookings_subtract_their_slot() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    let customer = Customer::new("Ada", "ada@example.com");
    let booking = Booking::new(barber.id, date("2025-10-30"), slot("15:00"), &customer);
    stores
        .bookings
        .reserve_if_free(&booking)
        .await
        .expect("reserve");

    let day = service(&stores)
        .resolve(barber.id, date("2025-10-30"))
        .await
        .expect("resolve");

    for s in &day {
        assert_eq!(s.available, s.time != slot("15:00"), "slot {}", s.time);
    }

    // A cancelled booking releases the slot.
    stores.bookings.cancel(booking.id).await.expect("cancel");
    let day = service(&stores)
        .resolve(barber.id, date("2025-10-30"))
        .await
        .expect("resolve");
    assert!(day.iter().all(|s| s.available));
}

#[tokio::test]
async fn blocked_slots_render_present_but_blocked() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    let mut record = ScheduleRecord::manual(
        barber.id,
        date("2025-10-30"),
        DayDisposition::Open,
        vec![slot("09:00"), slot("09:30")],
    );
    record.unavailable_slots = vec![slot("10:00")];
    stores.schedules.upsert(&record).await.expect("upsert");

    let day = service(&stores)
        .resolve(barber.id, date("2025-10-30"))
        .await
        .expect("resolve");

    let times: Vec<_> = day.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![slot("09:00"), slot("09:30"), slot("10:00")]);
    assert!(day[0].available && day[1].available);
    assert!(!day[2].available);
}

#[tokio::test]
async fn day_off_record_blocks_every_slot() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    let record = ScheduleRecord::manual(
        barber.id,
        date("2025-10-30"),
        DayDisposition::ClosedDayOff,
        template(Weekday::Thu),
    );
    stores.schedules.upsert(&record).await.expect("upsert");

    let day = service(&stores)
        .resolve(barber.id, date("2025-10-30"))
        .await
        .expect("resolve");

    assert!(!day.is_empty());
    assert!(day.iter().all(|s| !s.available));
}

#[tokio::test]
async fn malformed_slot_lists_fail_safe_to_no_availability() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;

    let record = ScheduleRecord::manual(
        barber.id,
        date("2025-10-30"),
        DayDisposition::Open,
        vec![slot("09:00")],
    );
    stores.schedules.upsert(&record).await.expect("upsert");

    sqlx::query("UPDATE schedule_records SET available_slots = 'not-json' WHERE barber_id = ?")
        .bind(barber.id.to_string())
        .execute(&pool)
        .await
        .expect("corrupt row");

    let day = service(&stores)
        .resolve(barber.id, date("2025-10-30"))
        .await
        .expect("resolve survives malformed persistence");
    assert!(day.iter().all(|s| !s.available));
}
