//! Domain events for policy issuance
//!
//! One event is produced per successful issuance and handed to the
//! [`EventNotifier`](crate::ports::EventNotifier). Consumers downstream
//! (billing) only need to know which policy was issued, from which
//! quotation, and where to reach the owner.

use serde::{Deserialize, Serialize};

use core_kernel::{PolicyId, QuotationId};

/// Emitted after a policy has been persisted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyIssuedEvent {
    pub policy_id: PolicyId,
    pub quotation_id: QuotationId,
    pub owner_email: String,
}

impl PolicyIssuedEvent {
    /// Returns the event type name for routing
    pub fn event_type(&self) -> &'static str {
        "PolicyIssued"
    }
}
