//! Policy issuance
//!
//! [`PolicyIssuanceOrchestrator`] runs the issuance pipeline:
//!
//! ```text
//! lookup quotation -> reject missing/expired -> build owner -> issue
//!   -> persist -> publish event -> return saved policy
//! ```
//!
//! Steps run strictly in that order, each exactly once, and the first
//! failure stops the pipeline. There is no compensation: when publishing
//! fails the policy stays persisted and the failure is still returned.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use core_kernel::{PolicyId, PortError, QuotationId};

use crate::error::PolicyError;
use crate::owner::Owner;
use crate::policy::{Policy, PolicyFactory};
use crate::ports::{EventNotifier, PolicyStore, QuotationLookupClient};

/// Raw issuance request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuePolicyCommand {
    pub quotation_id: QuotationId,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl IssuePolicyCommand {
    pub fn new(
        quotation_id: impl Into<QuotationId>,
        owner_id: impl Into<String>,
        owner_name: impl Into<String>,
        owner_email: impl Into<String>,
    ) -> Self {
        Self {
            quotation_id: quotation_id.into(),
            owner_id: Some(owner_id.into()),
            owner_name: Some(owner_name.into()),
            owner_email: Some(owner_email.into()),
        }
    }
}

/// Issues policies against quotations held by the quoting service
#[derive(Clone)]
pub struct PolicyIssuanceOrchestrator {
    lookup: Arc<dyn QuotationLookupClient>,
    store: Arc<dyn PolicyStore>,
    notifier: Arc<dyn EventNotifier>,
    factory: PolicyFactory,
}

impl PolicyIssuanceOrchestrator {
    pub fn new(
        lookup: Arc<dyn QuotationLookupClient>,
        store: Arc<dyn PolicyStore>,
        notifier: Arc<dyn EventNotifier>,
        factory: PolicyFactory,
    ) -> Self {
        Self {
            lookup,
            store,
            notifier,
            factory,
        }
    }

    /// Issues a policy for the quotation in `command`
    ///
    /// # Errors
    ///
    /// - `QuotationNotFound` when the lookup misses
    /// - `QuotationExpired` when the quotation's expiry date has passed
    /// - `InvalidArgument` for a blank quotation id or a missing owner field
    /// - `Port` for any lookup, store or notifier failure, unchanged, and
    ///   `Port(Internal)` when the policy term runs past the calendar
    #[instrument(skip(self, command), fields(quotation_id = %command.quotation_id))]
    pub async fn issue_policy(&self, command: IssuePolicyCommand) -> Result<Policy, PolicyError> {
        let IssuePolicyCommand {
            quotation_id,
            owner_id,
            owner_name,
            owner_email,
        } = command;

        if quotation_id.as_str().trim().is_empty() {
            return Err(PolicyError::invalid_argument("Quotation id is required"));
        }

        let quotation = self
            .lookup
            .find_by_id(&quotation_id)
            .await?
            .ok_or_else(|| PolicyError::QuotationNotFound(quotation_id.clone()))?;

        let today = self.factory.today();
        if quotation.is_expired_on(today) {
            warn!(expires_at = %quotation.expires_at, %today, "Rejecting expired quotation");
            return Err(PolicyError::QuotationExpired(quotation_id));
        }

        let owner = Owner::from_parts(owner_id, owner_name, owner_email)?;
        let policy = self
            .factory
            .issue(quotation_id, owner)
            .map_err(|e| PortError::Internal {
                message: format!("Policy term cannot be computed: {}", e),
                source: Some(Box::new(e)),
            })?;

        let saved = self.store.save(policy).await?;
        info!(policy_id = %saved.id(), "Policy persisted");

        self.notifier.publish_policy_issued(&saved.to_event()).await?;

        Ok(saved)
    }

    /// Loads a previously issued policy
    #[instrument(skip(self), fields(policy_id = %id))]
    pub async fn find_policy(&self, id: &PolicyId) -> Result<Option<Policy>, PolicyError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub fn lookup(&self) -> &Arc<dyn QuotationLookupClient> {
        &self.lookup
    }

    pub fn store(&self) -> &Arc<dyn PolicyStore> {
        &self.store
    }
}
