//! Booking flow integration tests: reserve-if-free semantics and the
//! cancellation hand-off to the waitlist.

mod common;

use std::sync::Arc;

use common::{add_barber, date, setup_pool, slot, stores, Stores};
use trimline::adapters::notify::RecordingNotifier;
use trimline::domain::ports::Notifier;
use trimline::{
    AvailabilityService, Booking, BookingService, BookingStatus, ClosureOrigin, ClosureType,
    Customer, DomainError, FixedClock, SpecificClosure, WaitlistService, WaitlistStatus,
};

struct Setup {
    booking: BookingService,
    waitlist: Arc<WaitlistService>,
    recorder: Arc<RecordingNotifier>,
}

fn setup(stores: &Stores) -> Setup {
    let recorder = Arc::new(RecordingNotifier::new());
    let notifier: Arc<dyn Notifier> = recorder.clone();
    let availability = Arc::new(AvailabilityService::new(
        stores.barbers.clone(),
        stores.schedules.clone(),
        stores.closures.clone(),
        stores.bookings.clone(),
    ));
    let waitlist = Arc::new(WaitlistService::new(
        stores.barbers.clone(),
        stores.waitlist.clone(),
        notifier,
        Arc::new(FixedClock::on_date(date("2025-11-03"))),
        24,
    ));
    let booking = BookingService::new(stores.bookings.clone(), availability, waitlist.clone());
    Setup {
        booking,
        waitlist,
        recorder,
    }
}

#[tokio::test]
async fn booking_an_open_slot_succeeds() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;
    let setup = setup(&stores);

    let booking = setup
        .booking
        .book(
            barber.id,
            date("2025-11-06"),
            slot("15:00"),
            Customer::new("Ada", "ada@example.com"),
        )
        .await
        .expect("book");

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.time, slot("15:00"));
}

#[tokio::test]
async fn double_booking_the_same_slot_is_rejected() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;
    let setup = setup(&stores);
    let day = date("2025-11-06");

    setup
        .booking
        .book(barber.id, day, slot("15:00"), Customer::new("Ada", "ada@example.com"))
        .await
        .expect("first booking");

    let err = setup
        .booking
        .book(barber.id, day, slot("15:00"), Customer::new("Bob", "bob@example.com"))
        .await
        .expect_err("second booking");
    assert!(matches!(err, DomainError::SlotTaken { .. }));
}

#[tokio::test]
async fn conditional_insert_loses_the_race_cleanly() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;
    let day = date("2025-11-06");

    // Two writers that both passed the availability check.
    let ada = Booking::new(barber.id, day, slot("15:00"), &Customer::new("Ada", "ada@example.com"));
    let bob = Booking::new(barber.id, day, slot("15:00"), &Customer::new("Bob", "bob@example.com"));

    stores.bookings.reserve_if_free(&ada).await.expect("winner");
    let err = stores
        .bookings
        .reserve_if_free(&bob)
        .await
        .expect_err("loser");
    assert!(matches!(err, DomainError::SlotTaken { .. }));

    // A cancelled booking frees the unique slot for rebooking.
    stores.bookings.cancel(ada.id).await.expect("cancel");
    stores.bookings.reserve_if_free(&bob).await.expect("rebook");
}

#[tokio::test]
async fn closed_slots_cannot_be_booked() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;
    let setup = setup(&stores);
    let day = date("2025-11-06");

    let closure = SpecificClosure::new(
        barber.id,
        day,
        ClosureType::Afternoon,
        "training",
        ClosureOrigin::Admin,
    );
    stores
        .closures
        .insert_specific(&closure)
        .await
        .expect("insert closure");

    let err = setup
        .booking
        .book(barber.id, day, slot("15:00"), Customer::new("Ada", "ada@example.com"))
        .await
        .expect_err("closed afternoon");
    assert!(matches!(err, DomainError::SlotTaken { .. }));

    // The morning is untouched.
    setup
        .booking
        .book(barber.id, day, slot("09:00"), Customer::new("Ada", "ada@example.com"))
        .await
        .expect("morning still open");
}

#[tokio::test]
async fn cancelling_offers_the_freed_slot_to_the_waitlist_head() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;
    let setup = setup(&stores);
    let day = date("2025-11-06");

    let booking = setup
        .booking
        .book(barber.id, day, slot("15:00"), Customer::new("Ada", "ada@example.com"))
        .await
        .expect("book");

    let entry = setup
        .waitlist
        .join(barber.id, day, Customer::new("Bob", "bob@example.com"), None)
        .await
        .expect("join");

    let cancelled = setup.booking.cancel(booking.id).await.expect("cancel");
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    let sent = setup.recorder.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0.email, "bob@example.com");
    assert_eq!(sent[0].1.time, slot("15:00"));

    let entries = setup.waitlist.entries_for_day(barber.id, day).await.expect("list");
    let notified = entries.iter().find(|e| e.id == entry.id).expect("entry");
    assert_eq!(notified.status, WaitlistStatus::Notified);
}

#[tokio::test]
async fn cancelling_twice_is_an_error() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    let barber = add_barber(&stores, "Marco", "marco@example.com").await;
    let setup = setup(&stores);

    let booking = setup
        .booking
        .book(
            barber.id,
            date("2025-11-06"),
            slot("15:00"),
            Customer::new("Ada", "ada@example.com"),
        )
        .await
        .expect("book");

    setup.booking.cancel(booking.id).await.expect("cancel");
    let err = setup
        .booking
        .cancel(booking.id)
        .await
        .expect_err("second cancel");
    assert!(matches!(err, DomainError::ValidationFailed(_)));
}

#[tokio::test]
async fn cancelling_an_unknown_booking_is_not_found() {
    let pool = setup_pool().await;
    let stores = stores(&pool);
    add_barber(&stores, "Marco", "marco@example.com").await;
    let setup = setup(&stores);

    let err = setup
        .booking
        .cancel(uuid::Uuid::new_v4())
        .await
        .expect_err("unknown booking");
    assert!(matches!(err, DomainError::BookingNotFound(_)));
}
