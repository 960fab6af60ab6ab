//! `trimline waitlist`: join, leave, and inspect waitlist queues.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::cli::context::AppContext;
use crate::cli::output::{base_table, print_json};
use crate::domain::models::Customer;
use crate::domain::slots::Slot;

#[derive(Args, Debug)]
pub struct WaitlistArgs {
    #[command(subcommand)]
    pub command: WaitlistCommands,
}

#[derive(Subcommand, Debug)]
pub enum WaitlistCommands {
    /// Join the waitlist for a barber and date
    Join {
        /// Barber ID or email
        #[arg(long)]
        barber: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Preferred time (HH:MM), advisory only
        #[arg(long)]
        time: Option<Slot>,

        /// Customer display name
        #[arg(long)]
        name: String,

        /// Customer email
        #[arg(long)]
        email: String,
    },

    /// Leave the waitlist; later entries move up one position
    Leave {
        /// Waitlist entry ID
        id: Uuid,
    },

    /// Mark a notified entry as booked
    Booked {
        /// Waitlist entry ID
        id: Uuid,
    },

    /// List the queue for a barber and date
    List {
        /// Barber ID or email
        #[arg(long)]
        barber: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

pub async fn execute(args: WaitlistArgs, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;

    match args.command {
        WaitlistCommands::Join {
            barber,
            date,
            time,
            name,
            email,
        } => {
            let barber = ctx.resolve_barber(&barber).await?;
            let entry = ctx
                .waitlist
                .join(barber.id, date, Customer::new(name, email), time)
                .await?;
            if json {
                print_json(&entry)?;
            } else {
                println!(
                    "Joined waitlist for {} on {} at position {} ({})",
                    barber.email, date, entry.position, entry.id
                );
            }
        }
        WaitlistCommands::Leave { id } => {
            let entry = ctx.waitlist.leave(id).await?;
            if json {
                print_json(&entry)?;
            } else {
                println!("Left waitlist ({})", entry.id);
            }
        }
        WaitlistCommands::Booked { id } => {
            let entry = ctx.waitlist.mark_booked(id).await?;
            if json {
                print_json(&entry)?;
            } else {
                println!("Waitlist entry {} marked booked", entry.id);
            }
        }
        WaitlistCommands::List { barber, date } => {
            let barber = ctx.resolve_barber(&barber).await?;
            let entries = ctx.waitlist.entries_for_day(barber.id, date).await?;
            if json {
                print_json(&entries)?;
            } else {
                let mut table = base_table(&["Pos", "Customer", "Preferred", "Status"]);
                for e in &entries {
                    table.add_row(vec![
                        e.position.to_string(),
                        format!("{} <{}>", e.customer_name, e.customer_email),
                        e.time.map_or_else(|| "-".to_string(), |t| t.to_string()),
                        e.status.as_str().to_string(),
                    ]);
                }
                println!("{table}");
            }
        }
    }
    Ok(())
}
