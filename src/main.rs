//! Trimline CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trimline::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => trimline::cli::commands::init::execute(args, cli.json).await,
        Commands::Barber(args) => trimline::cli::commands::barber::execute(args, cli.json).await,
        Commands::Availability(args) => {
            trimline::cli::commands::availability::execute(args, cli.json).await
        }
        Commands::Horizon(args) => trimline::cli::commands::horizon::execute(args, cli.json).await,
        Commands::Closure(args) => trimline::cli::commands::closure::execute(args, cli.json).await,
        Commands::Booking(args) => trimline::cli::commands::booking::execute(args, cli.json).await,
        Commands::Waitlist(args) => {
            trimline::cli::commands::waitlist::execute(args, cli.json).await
        }
    };

    if let Err(err) = result {
        trimline::cli::handle_error(err, cli.json);
    }
}
