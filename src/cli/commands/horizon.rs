//! `trimline horizon`: run schedule-horizon maintenance.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::context::AppContext;
use crate::cli::output::print_json;

#[derive(Args, Debug)]
pub struct HorizonArgs {
    #[command(subcommand)]
    pub command: HorizonCommands,
}

#[derive(Subcommand, Debug)]
pub enum HorizonCommands {
    /// Extend the schedule horizon and retire stale records
    Run {
        /// Days ahead to maintain (defaults to the configured horizon)
        #[arg(long)]
        days: Option<u32>,
    },
}

pub async fn execute(args: HorizonArgs, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;

    match args.command {
        HorizonCommands::Run { days } => {
            let days = days.unwrap_or(ctx.config.horizon.days);
            let report = ctx.horizon.run(days).await?;
            let expired = ctx.waitlist.expire_notified().await?;

            if json {
                print_json(&serde_json::json!({
                    "created": report.created,
                    "repaired": report.repaired,
                    "closures_created": report.closures_created,
                    "retired": report.retired,
                    "waitlist_expired": expired,
                    "errors": report.errors,
                }))?;
                return Ok(());
            }

            println!(
                "Horizon maintained for {days} days: {} created, {} repaired, \
                 {} auto closures, {} retired, {} waitlist entries expired",
                report.created,
                report.repaired,
                report.closures_created,
                report.retired,
                expired
            );
            for error in &report.errors {
                eprintln!("  warning: {error}");
            }
        }
    }
    Ok(())
}
