//! Policy Issuance Orchestrator Tests
//!
//! Drives the orchestrator with in-process doubles that record every call
//! into a shared journal, so each test can assert which steps ran and in
//! which order.
//!
//! # Test Organization
//!
//! - `happy_path` - successful issuance and step ordering
//! - `rejections` - not found, expired and invalid input short-circuit
//! - `infra_failures` - lookup, store and notifier failures pass through

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use core_kernel::{
    DomainPort, FixedClock, HealthCheckResult, HealthCheckable, PolicyId, PortError, QuotationId,
};
use domain_policy::{
    EventNotifier, InMemoryPolicyStore, IssuePolicyCommand, Policy, PolicyError, PolicyFactory,
    PolicyIssuanceOrchestrator, PolicyIssuedEvent, PolicyStore, QuotationLookupClient,
    QuotationSnapshot,
};
use rust_decimal_macros::dec;

// ============================================================================
// TEST DOUBLES
// ============================================================================

type Journal = Arc<Mutex<Vec<String>>>;

fn record(journal: &Journal, entry: impl Into<String>) {
    journal.lock().unwrap().push(entry.into());
}

struct StubLookup {
    quotations: Vec<QuotationSnapshot>,
    failure: Option<fn() -> PortError>,
    journal: Journal,
}

impl DomainPort for StubLookup {}

#[async_trait]
impl HealthCheckable for StubLookup {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("stub-lookup")
    }
}

#[async_trait]
impl QuotationLookupClient for StubLookup {
    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<QuotationSnapshot>, PortError> {
        record(&self.journal, format!("lookup:{}", id));
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(self.quotations.iter().find(|q| &q.id == id).cloned())
    }
}

struct RecordingStore {
    inner: InMemoryPolicyStore,
    fail: bool,
    journal: Journal,
}

impl DomainPort for RecordingStore {}

#[async_trait]
impl HealthCheckable for RecordingStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("recording-store")
    }
}

#[async_trait]
impl PolicyStore for RecordingStore {
    async fn save(&self, policy: Policy) -> Result<Policy, PortError> {
        record(&self.journal, "save");
        if self.fail {
            return Err(PortError::connection("database down"));
        }
        self.inner.save(policy).await
    }

    async fn find_by_id(&self, id: &PolicyId) -> Result<Option<Policy>, PortError> {
        self.inner.find_by_id(id).await
    }
}

struct RecordingNotifier {
    events: Arc<Mutex<Vec<PolicyIssuedEvent>>>,
    fail: bool,
    journal: Journal,
}

impl DomainPort for RecordingNotifier {}

#[async_trait]
impl EventNotifier for RecordingNotifier {
    async fn publish_policy_issued(&self, event: &PolicyIssuedEvent) -> Result<(), PortError> {
        record(&self.journal, "publish");
        if self.fail {
            return Err(PortError::ServiceUnavailable {
                service: "broker".to_string(),
            });
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn snapshot(id: &str, expires_at: NaiveDate) -> QuotationSnapshot {
    QuotationSnapshot::reconstruct(
        QuotationId::from(id),
        Some("Max".to_string()),
        Some("DOG".to_string()),
        None,
        3,
        false,
        dec!(12.0),
        expires_at,
    )
}

struct Harness {
    orchestrator: PolicyIssuanceOrchestrator,
    store: InMemoryPolicyStore,
    events: Arc<Mutex<Vec<PolicyIssuedEvent>>>,
    journal: Journal,
}

#[derive(Default)]
struct HarnessOptions {
    lookup_failure: Option<fn() -> PortError>,
    store_fails: bool,
    notifier_fails: bool,
    today: Option<NaiveDate>,
}

fn harness(quotations: Vec<QuotationSnapshot>, options: HarnessOptions) -> Harness {
    let journal: Journal = Arc::default();
    let store = InMemoryPolicyStore::new();
    let events = Arc::new(Mutex::new(Vec::new()));

    let orchestrator = PolicyIssuanceOrchestrator::new(
        Arc::new(StubLookup {
            quotations,
            failure: options.lookup_failure,
            journal: journal.clone(),
        }),
        Arc::new(RecordingStore {
            inner: store.clone(),
            fail: options.store_fails,
            journal: journal.clone(),
        }),
        Arc::new(RecordingNotifier {
            events: events.clone(),
            fail: options.notifier_fails,
            journal: journal.clone(),
        }),
        PolicyFactory::new(Arc::new(FixedClock(options.today.unwrap_or_else(today)))),
    );

    Harness {
        orchestrator,
        store,
        events,
        journal,
    }
}

fn command(quotation_id: &str) -> IssuePolicyCommand {
    IssuePolicyCommand::new(quotation_id, "o1", "John", "j@x.com")
}

fn journal(h: &Harness) -> Vec<String> {
    h.journal.lock().unwrap().clone()
}

// ============================================================================
// HAPPY PATH
// ============================================================================

mod happy_path {
    use super::*;

    #[tokio::test]
    async fn test_issue_policy_against_valid_quotation() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions::default(),
        );

        let policy = h.orchestrator.issue_policy(command("q-1")).await.unwrap();

        assert_eq!(policy.quotation_id().as_str(), "q-1");
        assert!(policy.is_active_on(today()));
        assert_eq!(policy.start_date(), today());
        assert_eq!(policy.end_date(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(policy.owner().email(), "j@x.com");
    }

    #[tokio::test]
    async fn test_steps_run_in_order_exactly_once() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions::default(),
        );

        h.orchestrator.issue_policy(command("q-1")).await.unwrap();

        assert_eq!(journal(&h), vec!["lookup:q-1", "save", "publish"]);
    }

    #[tokio::test]
    async fn test_saved_policy_is_returned_and_published() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions::default(),
        );

        let policy = h.orchestrator.issue_policy(command("q-1")).await.unwrap();

        let stored = h.store.find_by_id(&policy.id()).await.unwrap();
        assert_eq!(stored.as_ref(), Some(&policy));
        assert_eq!(*h.events.lock().unwrap(), vec![policy.to_event()]);
    }

    #[tokio::test]
    async fn test_quotation_expiring_today_is_still_valid() {
        let h = harness(vec![snapshot("q-1", today())], HarnessOptions::default());
        assert!(h.orchestrator.issue_policy(command("q-1")).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_issuance_yields_distinct_policies() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions::default(),
        );

        let first = h.orchestrator.issue_policy(command("q-1")).await.unwrap();
        let second = h.orchestrator.issue_policy(command("q-1")).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(h.store.find_by_quotation(&QuotationId::from("q-1")).await.len(), 2);
    }

    #[tokio::test]
    async fn test_find_policy_after_issuance() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions::default(),
        );
        let policy = h.orchestrator.issue_policy(command("q-1")).await.unwrap();

        let found = h.orchestrator.find_policy(&policy.id()).await.unwrap();
        assert_eq!(found, Some(policy));
        assert!(h.orchestrator.find_policy(&PolicyId::new()).await.unwrap().is_none());
    }
}

// ============================================================================
// REJECTIONS
// ============================================================================

mod rejections {
    use super::*;

    #[tokio::test]
    async fn test_expired_quotation_is_rejected_without_side_effects() {
        let yesterday = today() - Days::new(1);
        let h = harness(vec![snapshot("q-old", yesterday)], HarnessOptions::default());

        let err = h.orchestrator.issue_policy(command("q-old")).await.unwrap_err();

        assert!(matches!(err, PolicyError::QuotationExpired(ref id) if id.as_str() == "q-old"));
        assert!(err.to_string().contains("q-old"));
        assert!(h.store.is_empty().await);
        assert!(h.events.lock().unwrap().is_empty());
        assert_eq!(journal(&h), vec!["lookup:q-old"]);
    }

    #[tokio::test]
    async fn test_unknown_quotation_is_not_found_without_side_effects() {
        let h = harness(vec![], HarnessOptions::default());

        let err = h.orchestrator.issue_policy(command("missing")).await.unwrap_err();

        assert_eq!(err.to_string(), "Quotation not found with ID: missing");
        assert!(matches!(err, PolicyError::QuotationNotFound(_)));
        assert!(h.store.is_empty().await);
        assert_eq!(journal(&h), vec!["lookup:missing"]);
    }

    #[tokio::test]
    async fn test_missing_owner_field_is_invalid_argument() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions::default(),
        );
        let mut cmd = command("q-1");
        cmd.owner_email = None;

        let err = h.orchestrator.issue_policy(cmd).await.unwrap_err();

        assert_eq!(err.to_string(), "Owner email is required");
        assert!(err.is_client_error());
        assert!(h.store.is_empty().await);
        assert_eq!(journal(&h), vec!["lookup:q-1"]);
    }

    #[tokio::test]
    async fn test_blank_quotation_id_is_rejected_before_lookup() {
        let h = harness(vec![], HarnessOptions::default());

        let err = h.orchestrator.issue_policy(command("  ")).await.unwrap_err();

        assert_eq!(err.to_string(), "Quotation id is required");
        assert!(journal(&h).is_empty());
    }
}

// ============================================================================
// INFRASTRUCTURE FAILURES
// ============================================================================

mod infra_failures {
    use super::*;

    #[tokio::test]
    async fn test_lookup_failure_passes_through() {
        let h = harness(
            vec![],
            HarnessOptions {
                lookup_failure: Some(|| PortError::Timeout {
                    operation: "find_quotation".to_string(),
                    duration_ms: 10_000,
                }),
                ..Default::default()
            },
        );

        let err = h.orchestrator.issue_policy(command("q-1")).await.unwrap_err();

        assert!(matches!(err, PolicyError::Port(PortError::Timeout { .. })));
        assert!(!err.is_client_error());
        assert_eq!(journal(&h), vec!["lookup:q-1"]);
    }

    #[tokio::test]
    async fn test_store_failure_skips_publish() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions {
                store_fails: true,
                ..Default::default()
            },
        );

        let err = h.orchestrator.issue_policy(command("q-1")).await.unwrap_err();

        assert!(matches!(err, PolicyError::Port(PortError::Connection { .. })));
        assert!(h.events.lock().unwrap().is_empty());
        assert_eq!(journal(&h), vec!["lookup:q-1", "save"]);
    }

    #[tokio::test]
    async fn test_publish_failure_leaves_policy_persisted() {
        let h = harness(
            vec![snapshot("q-1", today() + Days::new(30))],
            HarnessOptions {
                notifier_fails: true,
                ..Default::default()
            },
        );

        let err = h.orchestrator.issue_policy(command("q-1")).await.unwrap_err();

        assert!(matches!(err, PolicyError::Port(PortError::ServiceUnavailable { .. })));
        assert_eq!(h.store.len().await, 1);
        assert_eq!(journal(&h), vec!["lookup:q-1", "save", "publish"]);
    }

    #[tokio::test]
    async fn test_term_past_the_calendar_is_internal_failure() {
        let h = harness(
            vec![snapshot("q-1", NaiveDate::MAX)],
            HarnessOptions {
                today: Some(NaiveDate::MAX),
                ..Default::default()
            },
        );

        let err = h.orchestrator.issue_policy(command("q-1")).await.unwrap_err();

        assert!(matches!(err, PolicyError::Port(PortError::Internal { .. })));
        assert!(!err.is_client_error());
        assert!(h.store.is_empty().await);
        assert_eq!(journal(&h), vec!["lookup:q-1"]);
    }
}
