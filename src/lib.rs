//! Trimline - barbershop booking core.
//!
//! The heart of the system is the availability resolution engine: given
//! a barber, a calendar date, and the existing reservations, determine
//! exactly which 30-minute slots are bookable. Around it sit a
//! schedule-horizon maintenance job that keeps a rolling window of
//! future dates populated without destroying manual overrides, and a
//! waitlist queue that notifies waiting customers when a slot frees up.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture:
//!
//! - **Domain layer** (`domain`): models, slot grid, repository ports
//! - **Service layer** (`services`): availability resolution, horizon
//!   maintenance, waitlist and booking coordination
//! - **Adapters** (`adapters`): SQLite persistence, notification
//! - **CLI layer** (`cli`): admin command-line surface

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigLoader};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    AutoClosureRule, Barber, Booking, BookingStatus, ClosureOrigin, ClosureType, Config,
    Customer, DayDisposition, RecurringClosure, RemovedAutoClosure, ScheduleOrigin,
    ScheduleRecord, SpecificClosure, WaitlistEntry, WaitlistStatus,
};
pub use domain::ports::{
    BarberRepository, BookingRepository, Clock, ClosureRepository, FixedClock, FreedSlotNotice,
    Notifier, NullNotifier, ScheduleRepository, SystemClock, WaitlistRepository,
};
pub use domain::slots::Slot;
pub use services::{
    AvailabilityService, BookingService, HorizonReport, HorizonService, SlotAvailability,
    WaitlistService,
};
