//! Quotation store backed by the `quotations` table

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError, QuotationId};
use domain_quoting::{Quotation, QuotationParts, QuotationStore};

use crate::error::DatabaseError;

#[derive(Debug, sqlx::FromRow)]
struct QuotationRow {
    id: String,
    pet_name: String,
    species: String,
    breed: Option<String>,
    age: i32,
    premium_plan: bool,
    price: Decimal,
    expires_at: NaiveDate,
}

impl TryFrom<QuotationRow> for Quotation {
    type Error = PortError;

    fn try_from(row: QuotationRow) -> Result<Self, Self::Error> {
        let id = row.id.clone();
        Quotation::reconstruct(QuotationParts {
            id: QuotationId::from(row.id),
            pet_name: row.pet_name,
            species: row.species,
            breed: row.breed,
            age: row.age,
            premium_plan: row.premium_plan,
            price: row.price,
            expires_at: row.expires_at,
        })
        .map_err(|e| {
            PortError::from(DatabaseError::SerializationError(format!(
                "Stored quotation {} is invalid: {}",
                id, e
            )))
        })
    }
}

/// PostgreSQL-backed [`QuotationStore`]
#[derive(Debug, Clone)]
pub struct PostgresQuotationStore {
    pool: PgPool,
}

impl PostgresQuotationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl DomainPort for PostgresQuotationStore {}

#[async_trait]
impl HealthCheckable for PostgresQuotationStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::probe(&self.pool, "postgres-quotation-store").await
    }
}

#[async_trait]
impl QuotationStore for PostgresQuotationStore {
    #[instrument(skip(self, quotation), fields(quotation_id = %quotation.id()))]
    async fn save(&self, quotation: Quotation) -> Result<Quotation, PortError> {
        sqlx::query(
            r#"
            INSERT INTO quotations (
                id, pet_name, species, breed, age, premium_plan, price, expires_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                pet_name = EXCLUDED.pet_name,
                species = EXCLUDED.species,
                breed = EXCLUDED.breed,
                age = EXCLUDED.age,
                premium_plan = EXCLUDED.premium_plan,
                price = EXCLUDED.price,
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(quotation.id().as_str())
        .bind(quotation.pet_name())
        .bind(quotation.species())
        .bind(quotation.breed())
        .bind(i32::from(quotation.age()))
        .bind(quotation.premium_plan())
        .bind(quotation.price())
        .bind(quotation.expires_at())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        debug!("Quotation row written");
        Ok(quotation)
    }

    #[instrument(skip(self), fields(quotation_id = %id))]
    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<Quotation>, PortError> {
        let row = sqlx::query_as::<_, QuotationRow>(
            r#"
            SELECT id, pet_name, species, breed, age, premium_plan, price, expires_at
            FROM quotations
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        row.map(Quotation::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Quotation>, PortError> {
        let rows = sqlx::query_as::<_, QuotationRow>(
            r#"
            SELECT id, pet_name, species, breed, age, premium_plan, price, expires_at
            FROM quotations
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        rows.into_iter().map(Quotation::try_from).collect()
    }
}
