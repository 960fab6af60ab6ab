//! Domain models for the trimline booking core.

pub mod barber;
pub mod booking;
pub mod closure;
pub mod config;
pub mod customer;
pub mod schedule;
pub mod waitlist;

pub use barber::Barber;
pub use booking::{Booking, BookingStatus};
pub use closure::{
    ClosureOrigin, ClosureType, RecurringClosure, RemovedAutoClosure, SpecificClosure,
};
pub use config::{
    AutoClosureRule, Config, DatabaseConfig, HorizonConfig, LoggingConfig, WaitlistConfig,
};
pub use customer::Customer;
pub use schedule::{DayDisposition, ScheduleOrigin, ScheduleRecord};
pub use waitlist::{WaitlistEntry, WaitlistStatus};
