//! Shared fixtures for integration tests.

// Not every test binary exercises every fixture.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use trimline::adapters::sqlite::{
    all_embedded_migrations, create_test_pool, Migrator, SqliteBarberRepository,
    SqliteBookingRepository, SqliteClosureRepository, SqliteScheduleRepository,
    SqliteWaitlistRepository,
};
use trimline::domain::ports::{
    BarberRepository, BookingRepository, ClosureRepository, ScheduleRepository,
    WaitlistRepository,
};
use trimline::{Barber, Slot};

/// In-memory database with the full schema applied.
pub async fn setup_pool() -> SqlitePool {
    let pool = create_test_pool().await.expect("failed to create test pool");
    Migrator::new(pool.clone())
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .expect("failed to run migrations");
    pool
}

/// All repositories over one pool.
pub struct Stores {
    pub barbers: Arc<dyn BarberRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub closures: Arc<dyn ClosureRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub waitlist: Arc<dyn WaitlistRepository>,
}

pub fn stores(pool: &SqlitePool) -> Stores {
    Stores {
        barbers: Arc::new(SqliteBarberRepository::new(pool.clone())),
        schedules: Arc::new(SqliteScheduleRepository::new(pool.clone())),
        closures: Arc::new(SqliteClosureRepository::new(pool.clone())),
        bookings: Arc::new(SqliteBookingRepository::new(pool.clone())),
        waitlist: Arc::new(SqliteWaitlistRepository::new(pool.clone())),
    }
}

/// Insert and return a fresh active barber.
pub async fn add_barber(stores: &Stores, name: &str, email: &str) -> Barber {
    let barber = Barber::new(name, email);
    stores
        .barbers
        .insert(&barber)
        .await
        .expect("failed to insert barber");
    barber
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date")
}

pub fn slot(s: &str) -> Slot {
    s.parse().expect("valid slot")
}
