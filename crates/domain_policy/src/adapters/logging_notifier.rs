//! Event notifier that writes to the application log
//!
//! Stands in for a message broker: the billing system is the intended
//! consumer of policy-issued events.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use core_kernel::{DomainPort, PortError};

use crate::events::PolicyIssuedEvent;
use crate::ports::EventNotifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventNotifier;

impl LoggingEventNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl DomainPort for LoggingEventNotifier {}

#[async_trait]
impl EventNotifier for LoggingEventNotifier {
    async fn publish_policy_issued(&self, event: &PolicyIssuedEvent) -> Result<(), PortError> {
        info!(
            event_type = event.event_type(),
            policy_id = %event.policy_id,
            quotation_id = %event.quotation_id,
            owner_email = %event.owner_email,
            published_at = %Utc::now().to_rfc3339(),
            consumer = "billing",
            "Policy issued event published"
        );
        Ok(())
    }
}
