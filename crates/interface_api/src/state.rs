//! Application state shared across handlers

use std::sync::Arc;

use core_kernel::{Clock, HealthCheckable};
use domain_policy::PolicyIssuanceOrchestrator;
use domain_quoting::QuotationService;

/// Adapters probed by `GET /health/ready`
#[derive(Clone, Default)]
pub struct HealthProbes(Arc<Vec<Arc<dyn HealthCheckable>>>);

impl HealthProbes {
    pub fn new(probes: Vec<Arc<dyn HealthCheckable>>) -> Self {
        Self(Arc::new(probes))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn HealthCheckable>> {
        self.0.iter()
    }
}

/// State of the quoting service
#[derive(Clone)]
pub struct QuotingState {
    pub service: QuotationService,
    pub clock: Arc<dyn Clock>,
    pub probes: HealthProbes,
}

/// State of the policy service
#[derive(Clone)]
pub struct PolicyState {
    pub orchestrator: PolicyIssuanceOrchestrator,
    pub clock: Arc<dyn Clock>,
    pub probes: HealthProbes,
}
