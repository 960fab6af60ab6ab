//! `trimline barber`: provision and manage barbers.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::context::AppContext;
use crate::cli::output::{base_table, print_json};
use crate::domain::models::Barber;

#[derive(Args, Debug)]
pub struct BarberArgs {
    #[command(subcommand)]
    pub command: BarberCommands,
}

#[derive(Subcommand, Debug)]
pub enum BarberCommands {
    /// Provision a new barber
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Contact email (unique)
        #[arg(long)]
        email: String,
    },

    /// List barbers
    List {
        /// Include deactivated barbers
        #[arg(long)]
        all: bool,
    },

    /// Reactivate a barber
    Activate {
        /// Barber ID or email
        barber: String,
    },

    /// Deactivate a barber
    Deactivate {
        /// Barber ID or email
        barber: String,
    },
}

pub async fn execute(args: BarberArgs, json: bool) -> Result<()> {
    let ctx = AppContext::init().await?;

    match args.command {
        BarberCommands::Add { name, email } => {
            let barber = Barber::new(name, email);
            ctx.barbers.insert(&barber).await?;
            if json {
                print_json(&barber)?;
            } else {
                println!("Added barber {} <{}> ({})", barber.name, barber.email, barber.id);
            }
        }
        BarberCommands::List { all } => {
            let barbers = ctx.barbers.list(!all).await?;
            if json {
                print_json(&barbers)?;
            } else {
                let mut table = base_table(&["ID", "Name", "Email", "Active"]);
                for b in &barbers {
                    table.add_row(vec![
                        b.id.to_string(),
                        b.name.clone(),
                        b.email.clone(),
                        if b.active { "yes" } else { "no" }.to_string(),
                    ]);
                }
                println!("{table}");
            }
        }
        BarberCommands::Activate { barber } => {
            let barber = ctx.resolve_barber(&barber).await?;
            ctx.barbers.set_active(barber.id, true).await?;
            println!("Activated {}", barber.email);
        }
        BarberCommands::Deactivate { barber } => {
            let barber = ctx.resolve_barber(&barber).await?;
            ctx.barbers.set_active(barber.id, false).await?;
            println!("Deactivated {}", barber.email);
        }
    }
    Ok(())
}
