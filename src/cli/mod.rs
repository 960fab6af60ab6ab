//! Command-line interface.

pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

use commands::availability::AvailabilityArgs;
use commands::barber::BarberArgs;
use commands::booking::BookingArgs;
use commands::closure::ClosureArgs;
use commands::horizon::HorizonArgs;
use commands::init::InitArgs;
use commands::waitlist::WaitlistArgs;

/// Barbershop booking core: availability, horizon maintenance, waitlist.
#[derive(Parser, Debug)]
#[command(name = "trimline", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize project configuration and database
    Init(InitArgs),
    /// Provision and manage barbers
    Barber(BarberArgs),
    /// Resolve bookable slots for a barber and date
    Availability(AvailabilityArgs),
    /// Run schedule-horizon maintenance
    Horizon(HorizonArgs),
    /// Manage recurring and per-date closures
    Closure(ClosureArgs),
    /// Book and cancel slots
    Booking(BookingArgs),
    /// Join, leave, and inspect waitlists
    Waitlist(WaitlistArgs),
}

/// Print an error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        eprintln!("{}", serde_json::json!({ "error": format!("{err:#}") }));
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1);
}
