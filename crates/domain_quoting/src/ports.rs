//! Quoting Domain Ports
//!
//! The quoting service needs a single capability from its infrastructure: a
//! place to keep quotations. Adapters:
//!
//! - **PostgreSQL**: `infra_db::PostgresQuotationStore`
//! - **In-memory**: [`memory::InMemoryQuotationStore`], for local runs and tests

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError, QuotationId};

use crate::quotation::Quotation;

/// Persistence port for quotations
#[async_trait]
pub trait QuotationStore: DomainPort + HealthCheckable {
    /// Stores a quotation and returns the stored value
    async fn save(&self, quotation: Quotation) -> Result<Quotation, PortError>;

    /// Looks up a quotation; `Ok(None)` when no record exists
    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<Quotation>, PortError>;

    /// Returns every stored quotation in store order
    async fn find_all(&self) -> Result<Vec<Quotation>, PortError>;
}

/// In-memory quotation store
pub mod memory {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use core_kernel::HealthCheckResult;

    /// Keeps quotations in insertion order behind an async lock
    #[derive(Debug, Default, Clone)]
    pub struct InMemoryQuotationStore {
        quotations: Arc<RwLock<Vec<Quotation>>>,
    }

    impl InMemoryQuotationStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store
        pub async fn with_quotations(quotations: Vec<Quotation>) -> Self {
            let store = Self::new();
            store.quotations.write().await.extend(quotations);
            store
        }

        pub async fn len(&self) -> usize {
            self.quotations.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.quotations.read().await.is_empty()
        }
    }

    impl DomainPort for InMemoryQuotationStore {}

    #[async_trait]
    impl HealthCheckable for InMemoryQuotationStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("memory-quotation-store")
        }
    }

    #[async_trait]
    impl QuotationStore for InMemoryQuotationStore {
        async fn save(&self, quotation: Quotation) -> Result<Quotation, PortError> {
            let mut quotations = self.quotations.write().await;
            match quotations.iter_mut().find(|q| q.id() == quotation.id()) {
                Some(existing) => *existing = quotation.clone(),
                None => quotations.push(quotation.clone()),
            }
            Ok(quotation)
        }

        async fn find_by_id(&self, id: &QuotationId) -> Result<Option<Quotation>, PortError> {
            Ok(self
                .quotations
                .read()
                .await
                .iter()
                .find(|q| q.id() == id)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Quotation>, PortError> {
            Ok(self.quotations.read().await.clone())
        }
    }
}
