//! `trimline booking`: book and cancel slots.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::cli::context::AppContext;
use crate::cli::output::{base_table, print_json};
use crate::domain::models::Customer;
use crate::domain::slots::Slot;

#[derive(Args, Debug)]
pub struct BookingArgs {
    #[command(subcommand)]
    pub command: BookingCommands,
}

#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    /// Book a slot
    Book {
        /// Barber ID or email
        #[arg(long)]
        barber: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Slot start time (HH:MM)
        #[arg(long)]
        time: Slot,

        /// Customer display name
        #[arg(long)]
        name: String,

        /// Customer email
        #[arg(long)]
        email: String,
    },

    /// Cancel a booking; the freed slot is offered to the waitlist
    Cancel {
        /// Booking ID
        id: Uuid,
    },

    /// List bookings for a barber and date
    List {
        /// Barber ID or email
        #[arg(long)]
        barber: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

pub async fn execute(args: BookingArgs, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;

    match args.command {
        BookingCommands::Book {
            barber,
            date,
            time,
            name,
            email,
        } => {
            let barber = ctx.resolve_barber(&barber).await?;
            let booking = ctx
                .booking
                .book(barber.id, date, time, Customer::new(name, email))
                .await?;
            if json {
                print_json(&booking)?;
            } else {
                println!(
                    "Booked {} with {} on {} ({})",
                    booking.time, barber.email, booking.date, booking.id
                );
            }
        }
        BookingCommands::Cancel { id } => {
            let booking = ctx.booking.cancel(id).await?;
            if json {
                print_json(&booking)?;
            } else {
                println!(
                    "Cancelled booking {} ({} on {})",
                    booking.id, booking.time, booking.date
                );
            }
        }
        BookingCommands::List { barber, date } => {
            let barber = ctx.resolve_barber(&barber).await?;
            let bookings = ctx.bookings.for_day(barber.id, date).await?;
            if json {
                print_json(&bookings)?;
            } else {
                let mut table = base_table(&["ID", "Time", "Customer", "Status"]);
                for b in &bookings {
                    table.add_row(vec![
                        b.id.to_string(),
                        b.time.to_string(),
                        format!("{} <{}>", b.customer_name, b.customer_email),
                        b.status.as_str().to_string(),
                    ]);
                }
                println!("{table}");
            }
        }
    }
    Ok(())
}
