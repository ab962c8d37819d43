//! Policy Issued Event Tests

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{FixedClock, QuotationId};
use domain_policy::{Owner, PolicyFactory, PolicyIssuedEvent};

fn policy() -> domain_policy::Policy {
    PolicyFactory::new(Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())))
        .issue(QuotationId::from("q-42"), Owner::new("o1", "John", "j@x.com"))
        .unwrap()
}

#[test]
fn test_event_projects_policy_fields() {
    let policy = policy();
    let event = policy.to_event();

    assert_eq!(event.policy_id, policy.id());
    assert_eq!(event.quotation_id, QuotationId::from("q-42"));
    assert_eq!(event.owner_email, "j@x.com");
    assert_eq!(event.event_type(), "PolicyIssued");
}

#[test]
fn test_event_projection_is_deterministic() {
    let policy = policy();
    assert_eq!(policy.to_event(), policy.to_event());
}

#[test]
fn test_event_serializes_camel_case() {
    let event = policy().to_event();
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["quotationId"], "q-42");
    assert_eq!(json["ownerEmail"], "j@x.com");
    assert_eq!(json["policyId"], event.policy_id.to_string());

    let back: PolicyIssuedEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
