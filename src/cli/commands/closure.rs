//! `trimline closure`: manage recurring and per-date closures.

use std::collections::BTreeSet;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::cli::context::AppContext;
use crate::cli::output::{base_table, print_json, truncate};
use crate::domain::models::{ClosureOrigin, ClosureType, RecurringClosure, SpecificClosure};

#[derive(Args, Debug)]
pub struct ClosureArgs {
    #[command(subcommand)]
    pub command: ClosureCommands,
}

#[derive(Subcommand, Debug)]
pub enum ClosureCommands {
    /// Add a specific closure for one date
    Add {
        /// Barber ID or email
        #[arg(long)]
        barber: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Closure type (full, morning, afternoon)
        #[arg(long, value_name = "TYPE")]
        closure_type: String,

        /// Reason shown in listings
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Remove a specific closure. Deleting an automatic closure writes
    /// a tombstone so maintenance never recreates it.
    Remove {
        /// Closure ID
        id: Uuid,
    },

    /// List specific closures for a barber and date
    List {
        /// Barber ID or email
        #[arg(long)]
        barber: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },

    /// Set a barber's recurring closed weekdays
    Recurring {
        /// Barber ID or email
        #[arg(long)]
        barber: String,

        /// Comma-separated weekday indices, 0 = Sunday (empty to clear)
        #[arg(long, default_value = "")]
        weekdays: String,
    },
}

pub async fn execute(args: ClosureArgs, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;

    match args.command {
        ClosureCommands::Add {
            barber,
            date,
            closure_type,
            reason,
        } => {
            let barber = ctx.resolve_barber(&barber).await?;
            let closure_type = ClosureType::from_str(&closure_type)
                .with_context(|| format!("Unknown closure type '{closure_type}'"))?;
            let closure = SpecificClosure::new(
                barber.id,
                date,
                closure_type,
                reason,
                ClosureOrigin::Admin,
            );
            ctx.closures.insert_specific(&closure).await?;
            if json {
                print_json(&closure)?;
            } else {
                println!(
                    "Closed {} for {} on {} ({})",
                    closure.closure_type.as_str(),
                    barber.email,
                    date,
                    closure.id
                );
            }
        }
        ClosureCommands::Remove { id } => {
            let closure = ctx
                .closures
                .get_specific(id)
                .await?
                .with_context(|| format!("No closure {id}"))?;

            if closure.created_by.is_automatic() {
                ctx.closures.delete_specific_with_tombstone(&closure).await?;
                println!("Removed automatic closure {id}; it will not be recreated");
            } else {
                ctx.closures.delete_specific(id).await?;
                println!("Removed closure {id}");
            }
        }
        ClosureCommands::List { barber, date } => {
            let barber = ctx.resolve_barber(&barber).await?;
            let closures = ctx.closures.specific_for_day(barber.id, date).await?;
            if json {
                print_json(&closures)?;
            } else {
                let mut table = base_table(&["ID", "Type", "Created by", "Reason"]);
                for c in &closures {
                    table.add_row(vec![
                        c.id.to_string(),
                        c.closure_type.as_str().to_string(),
                        c.created_by.as_str().to_string(),
                        truncate(&c.reason, 40),
                    ]);
                }
                println!("{table}");
            }
        }
        ClosureCommands::Recurring { barber, weekdays } => {
            let barber = ctx.resolve_barber(&barber).await?;
            let closed_weekdays = parse_weekdays(&weekdays)?;
            let closure = RecurringClosure::new(barber.id, closed_weekdays.clone());
            ctx.closures.set_recurring(&closure).await?;
            if closed_weekdays.is_empty() {
                println!("Cleared recurring closures for {}", barber.email);
            } else {
                println!(
                    "Recurring closed weekdays for {}: {:?}",
                    barber.email, closed_weekdays
                );
            }
        }
    }
    Ok(())
}

fn parse_weekdays(raw: &str) -> Result<BTreeSet<u8>> {
    let mut weekdays = BTreeSet::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let day: u8 = part
            .parse()
            .with_context(|| format!("Invalid weekday '{part}'"))?;
        if day > 6 {
            bail!("Weekday {day} out of range (0 = Sunday ... 6 = Saturday)");
        }
        weekdays.insert(day);
    }
    Ok(weekdays)
}
