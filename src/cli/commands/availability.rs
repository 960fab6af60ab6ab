//! `trimline availability`: resolve the slot list for a barber and date.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use crate::cli::context::AppContext;
use crate::cli::output::{base_table, print_json, verdict};

#[derive(Args, Debug)]
pub struct AvailabilityArgs {
    /// Barber ID or email
    #[arg(long)]
    pub barber: String,

    /// Calendar date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
}

pub async fn execute(args: AvailabilityArgs, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;
    let barber = ctx.resolve_barber(&args.barber).await?;

    let day = ctx.availability.resolve(barber.id, args.date).await?;

    if json {
        print_json(&day)?;
        return Ok(());
    }

    if day.is_empty() {
        println!("No slots for {} on {}", barber.name, args.date);
        return Ok(());
    }

    let mut table = base_table(&["Time", "Availability"]);
    for slot in &day {
        table.add_row(vec![slot.time.to_string(), verdict(slot.available)]);
    }
    println!("{} on {}", barber.name, args.date);
    println!("{table}");
    Ok(())
}
