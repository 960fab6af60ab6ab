//! `trimline init`: create the project configuration and database.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

use crate::adapters::sqlite::initialize_database;
use crate::config::ConfigLoader;

const CONFIG_TEMPLATE: &str = r#"# Trimline configuration.
database:
  path: .trimline/trimline.db

logging:
  level: info
  format: pretty

horizon:
  days: 60

waitlist:
  notified_ttl_hours: 24

# Automatic closures applied by `trimline horizon run`, keyed by barber
# email. Omit `weekday` to apply the rule every day.
# auto_closures:
#   - barber_email: marco@example.com
#     weekday: 1            # Monday
#     closure_type: morning
#     reason: supplier pickup
auto_closures: []
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

pub async fn execute(args: InitArgs, json: bool) -> Result<()> {
    let config_path = Path::new(".trimline/config.yaml");

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    std::fs::create_dir_all(".trimline").context("Failed to create .trimline directory")?;
    std::fs::write(config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let config = ConfigLoader::load()?;
    let url = format!("sqlite:{}", config.database.path);
    let pool = initialize_database(&url)
        .await
        .context("Failed to initialize database")?;
    pool.close().await;

    if json {
        crate::cli::output::print_json(&serde_json::json!({
            "config": config_path.display().to_string(),
            "database": config.database.path,
        }))?;
    } else {
        println!(
            "Initialized {} and {}",
            config_path.display(),
            config.database.path
        );
    }
    Ok(())
}
