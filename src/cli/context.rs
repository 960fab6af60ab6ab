//! Shared wiring for CLI commands: config, pool, repositories, services.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use uuid::Uuid;

use crate::adapters::notify::TracingNotifier;
use crate::adapters::sqlite::{
    initialize_database, SqliteBarberRepository, SqliteBookingRepository,
    SqliteClosureRepository, SqliteScheduleRepository, SqliteWaitlistRepository,
};
use crate::config::ConfigLoader;
use crate::domain::models::{Barber, Config};
use crate::domain::ports::{
    BarberRepository, BookingRepository, Clock, ClosureRepository, Notifier, ScheduleRepository,
    SystemClock, WaitlistRepository,
};
use crate::services::{AvailabilityService, BookingService, HorizonService, WaitlistService};

/// Everything a command needs, wired from the loaded configuration.
pub struct AppContext {
    pub config: Config,
    pub barbers: Arc<dyn BarberRepository>,
    pub closures: Arc<dyn ClosureRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub availability: Arc<AvailabilityService>,
    pub horizon: HorizonService,
    pub waitlist: Arc<WaitlistService>,
    pub booking: BookingService,
}

impl AppContext {
    /// Load configuration, open the database, and wire the services.
    pub async fn init() -> Result<Self> {
        let config = ConfigLoader::load()?;
        let url = format!("sqlite:{}", config.database.path);
        let pool = initialize_database(&url)
            .await
            .context("Failed to open database")?;

        let barbers: Arc<dyn BarberRepository> =
            Arc::new(SqliteBarberRepository::new(pool.clone()));
        let schedules: Arc<dyn ScheduleRepository> =
            Arc::new(SqliteScheduleRepository::new(pool.clone()));
        let closures: Arc<dyn ClosureRepository> =
            Arc::new(SqliteClosureRepository::new(pool.clone()));
        let bookings: Arc<dyn BookingRepository> =
            Arc::new(SqliteBookingRepository::new(pool.clone()));
        let waitlist_repo: Arc<dyn WaitlistRepository> =
            Arc::new(SqliteWaitlistRepository::new(pool.clone()));

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        let availability = Arc::new(AvailabilityService::new(
            barbers.clone(),
            schedules.clone(),
            closures.clone(),
            bookings.clone(),
        ));
        let horizon = HorizonService::new(
            barbers.clone(),
            schedules,
            closures.clone(),
            clock.clone(),
            config.auto_closures.clone(),
        );
        let waitlist = Arc::new(WaitlistService::new(
            barbers.clone(),
            waitlist_repo,
            notifier,
            clock,
            config.waitlist.notified_ttl_hours,
        ));
        let booking = BookingService::new(bookings.clone(), availability.clone(), waitlist.clone());

        Ok(Self {
            config,
            barbers,
            closures,
            bookings,
            availability,
            horizon,
            waitlist,
            booking,
        })
    }

    /// Resolve a barber from a UUID or a contact email.
    pub async fn resolve_barber(&self, id_or_email: &str) -> Result<Barber> {
        let found = if let Ok(id) = Uuid::parse_str(id_or_email) {
            self.barbers.get(id).await?
        } else {
            self.barbers.get_by_email(id_or_email).await?
        };
        found.with_context(|| format!("No barber matching '{id_or_email}'"))
    }
}
