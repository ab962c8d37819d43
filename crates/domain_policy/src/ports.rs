//! Policy Domain Ports
//!
//! Three capabilities the issuance pipeline depends on, each injected as an
//! `Arc<dyn _>` at process start:
//!
//! - [`QuotationLookupClient`]: fetches a quotation snapshot from the quoting
//!   service (HTTP adapter in [`crate::adapters::quoting_http`])
//! - [`PolicyStore`]: persists issued policies (PostgreSQL adapter in
//!   `infra_db`, in-memory adapter in [`memory`])
//! - [`EventNotifier`]: receives the policy-issued event (logging adapter in
//!   [`crate::adapters::logging_notifier`])

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PolicyId, PortError, QuotationId};

use crate::events::PolicyIssuedEvent;
use crate::policy::Policy;
use crate::quotation::QuotationSnapshot;

/// Port for reading quotations owned by the quoting service
#[async_trait]
pub trait QuotationLookupClient: DomainPort + HealthCheckable {
    /// Fetches a quotation snapshot
    ///
    /// A lookup miss is `Ok(None)`; every other failure is a `PortError`.
    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<QuotationSnapshot>, PortError>;
}

/// Persistence port for policies
#[async_trait]
pub trait PolicyStore: DomainPort + HealthCheckable {
    /// Stores a policy and returns the stored value
    async fn save(&self, policy: Policy) -> Result<Policy, PortError>;

    /// Looks up a policy; `Ok(None)` when no record exists
    async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PortError>;
}

/// Port for announcing issued policies
#[async_trait]
pub trait EventNotifier: DomainPort {
    async fn publish_policy_issued(&self, event: &PolicyIssuedEvent) -> Result<(), PortError>;
}

/// In-memory policy store
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use core_kernel::HealthCheckResult;

    #[derive(Debug, Default, Clone)]
    pub struct InMemoryPolicyStore {
        policies: Arc<RwLock<HashMap<PolicyId, Policy>>>,
    }

    impl InMemoryPolicyStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn len(&self) -> usize {
            self.policies.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.policies.read().await.is_empty()
        }

        /// Every stored policy referencing the given quotation
        pub async fn find_by_quotation(&self, quotation_id: &QuotationId) -> Vec<Policy> {
            self.policies
                .read()
                .await
                .values()
                .filter(|p| p.quotation_id() == quotation_id)
                .cloned()
                .collect()
        }
    }

    impl DomainPort for InMemoryPolicyStore {}

    #[async_trait]
    impl HealthCheckable for InMemoryPolicyStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("memory-policy-store")
        }
    }

    #[async_trait]
    impl PolicyStore for InMemoryPolicyStore {
        async fn save(&self, policy: Policy) -> Result<Policy, PortError> {
            self.policies.write().await.insert(policy.id(), policy.clone());
            Ok(policy)
        }

        async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PortError> {
            Ok(self.policies.read().await.get(id).cloned())
        }
    }
}
