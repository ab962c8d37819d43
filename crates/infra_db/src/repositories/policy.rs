//! Policy store backed by the `policies` table
//!
//! The owner is stored as three flat columns and rebuilt on read.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError, QuotationId};
use domain_policy::{Owner, Policy, PolicyStore};

use crate::error::DatabaseError;

#[derive(Debug, sqlx::FromRow)]
struct PolicyRow {
    id: Uuid,
    quotation_id: String,
    owner_id: String,
    owner_name: String,
    owner_email: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    active: bool,
}

impl TryFrom<PolicyRow> for Policy {
    type Error = PortError;

    fn try_from(row: PolicyRow) -> Result<Self, Self::Error> {
        let id = row.id;
        Policy::reconstruct(
            PolicyId::from_uuid(id),
            QuotationId::from(row.quotation_id),
            Owner::new(row.owner_id, row.owner_name, row.owner_email),
            row.start_date,
            row.end_date,
            row.active,
        )
        .map_err(|e| {
            PortError::from(DatabaseError::SerializationError(format!(
                "Stored policy {} is invalid: {}",
                id, e
            )))
        })
    }
}

/// PostgreSQL-backed [`PolicyStore`]
#[derive(Debug, Clone)]
pub struct PostgresPolicyStore {
    pool: PgPool,
}

impl PostgresPolicyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All policies issued against one quotation, oldest first
    pub async fn find_by_quotation(&self, quotation_id: &QuotationId) -> Result<Vec<Policy>, PortError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, quotation_id, owner_id, owner_name, owner_email,
                   start_date, end_date, active
            FROM policies
            WHERE quotation_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(quotation_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        rows.into_iter().map(Policy::try_from).collect()
    }
}

impl DomainPort for PostgresPolicyStore {}

#[async_trait]
impl HealthCheckable for PostgresPolicyStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::probe(&self.pool, "postgres-policy-store").await
    }
}

#[async_trait]
impl PolicyStore for PostgresPolicyStore {
    #[instrument(skip(self, policy), fields(policy_id = %policy.id()))]
    async fn save(&self, policy: Policy) -> Result<Policy, PortError> {
        sqlx::query(
            r#"
            INSERT INTO policies (
                id, quotation_id, owner_id, owner_name, owner_email,
                start_date, end_date, active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(*policy.id().as_uuid())
        .bind(policy.quotation_id().as_str())
        .bind(policy.owner().id())
        .bind(policy.owner().name())
        .bind(policy.owner().email())
        .bind(policy.start_date())
        .bind(policy.end_date())
        .bind(policy.active_flag())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        debug!("Policy row written");
        Ok(policy)
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PortError> {
        let row = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, quotation_id, owner_id, owner_name, owner_email,
                   start_date, end_date, active
            FROM policies
            WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        row.map(Policy::try_from).transpose()
    }
}
