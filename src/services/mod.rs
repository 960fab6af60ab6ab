//! Service layer: use-case coordination over the domain ports.

pub mod availability;
pub mod booking;
pub mod horizon;
pub mod waitlist;

pub use availability::{AvailabilityService, SlotAvailability};
pub use booking::BookingService;
pub use horizon::{HorizonReport, HorizonService};
pub use waitlist::WaitlistService;
