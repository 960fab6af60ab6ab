//! SQLite adapter for the barber repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{parse_datetime, parse_uuid};
use crate::domain::errors::DomainResult;
use crate::domain::models::Barber;
use crate::domain::ports::BarberRepository;

#[derive(Clone)]
pub struct SqliteBarberRepository {
    pool: SqlitePool,
}

impl SqliteBarberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BarberRow {
    id: String,
    name: String,
    email: String,
    active: i64,
    created_at: String,
    updated_at: String,
}

fn row_to_barber(row: BarberRow) -> DomainResult<Barber> {
    Ok(Barber {
        id: parse_uuid(&row.id)?,
        name: row.name,
        email: row.email,
        active: row.active != 0,
        created_at: parse_datetime(&row.created_at)?,
        updated_at: parse_datetime(&row.updated_at)?,
    })
}

#[async_trait]
impl BarberRepository for SqliteBarberRepository {
    async fn insert(&self, barber: &Barber) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO barbers (id, name, email, active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(barber.id.to_string())
        .bind(&barber.name)
        .bind(&barber.email)
        .bind(i64::from(barber.active))
        .bind(barber.created_at.to_rfc3339())
        .bind(barber.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<Barber>> {
        let row: Option<BarberRow> = sqlx::query_as("SELECT * FROM barbers WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_barber).transpose()
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<Barber>> {
        let row: Option<BarberRow> = sqlx::query_as("SELECT * FROM barbers WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_barber).transpose()
    }

    async fn list(&self, only_active: bool) -> DomainResult<Vec<Barber>> {
        let rows: Vec<BarberRow> = if only_active {
            sqlx::query_as("SELECT * FROM barbers WHERE active = 1 ORDER BY name")
                .fetch_all(&self.pool)
                .await?
        } else {
            sqlx::query_as("SELECT * FROM barbers ORDER BY name")
                .fetch_all(&self.pool)
                .await?
        };
        rows.into_iter().map(row_to_barber).collect()
    }

    async fn set_active(&self, id: Uuid, active: bool) -> DomainResult<()> {
        sqlx::query("UPDATE barbers SET active = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(id.to_string())
            .bind(i64::from(active))
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
