//! Repository port for barber persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::Barber;

/// Repository port for barber records.
#[async_trait]
pub trait BarberRepository: Send + Sync {
    /// Insert a newly provisioned barber.
    async fn insert(&self, barber: &Barber) -> DomainResult<()>;

    /// Get a barber by ID.
    async fn get(&self, id: Uuid) -> DomainResult<Option<Barber>>;

    /// Get a barber by contact email.
    async fn get_by_email(&self, email: &str) -> DomainResult<Option<Barber>>;

    /// List barbers, optionally only active ones.
    async fn list(&self, only_active: bool) -> DomainResult<Vec<Barber>>;

    /// Toggle the active flag.
    async fn set_active(&self, id: Uuid, active: bool) -> DomainResult<()>;
}
