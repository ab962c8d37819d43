//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful failure
//! messages than a bare `assert_eq!`.

use chrono::NaiveDate;
use domain_policy::Policy;
use domain_quoting::Quotation;
use rust_decimal::Decimal;

/// Asserts that a price equals the expected value, ignoring scale
///
/// `12.0` and `12.00` are the same price.
pub fn assert_price_eq(actual: Decimal, expected: Decimal) {
    assert_eq!(
        actual.normalize(),
        expected.normalize(),
        "Price mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a quotation is still valid on `today`
pub fn assert_quotation_valid_on(quotation: &Quotation, today: NaiveDate) {
    assert!(
        !quotation.is_expired_on(today),
        "Quotation {} expired on {} but should be valid on {}",
        quotation.id(),
        quotation.expires_at(),
        today
    );
}

/// Asserts that a quotation has expired by `today`
pub fn assert_quotation_expired_on(quotation: &Quotation, today: NaiveDate) {
    assert!(
        quotation.is_expired_on(today),
        "Quotation {} expires on {} and should have expired by {}",
        quotation.id(),
        quotation.expires_at(),
        today
    );
}

/// Asserts that a policy was issued on `start` with a one-year window
pub fn assert_issued_on(policy: &Policy, start: NaiveDate) {
    assert_eq!(
        policy.start_date(),
        start,
        "Policy {} starts on {}, expected {}",
        policy.id(),
        policy.start_date(),
        start
    );
    let expected_end = start
        .checked_add_months(chrono::Months::new(12))
        .expect("start date out of range");
    assert_eq!(
        policy.end_date(),
        expected_end,
        "Policy {} ends on {}, expected {}",
        policy.id(),
        policy.end_date(),
        expected_end
    );
    assert!(policy.active_flag(), "Policy {} was issued inactive", policy.id());
}

/// Asserts that two policies carry the same stored fields
pub fn assert_same_policy(actual: &Policy, expected: &Policy) {
    assert_eq!(actual.id(), expected.id(), "Policy id mismatch");
    assert_eq!(
        actual.quotation_id(),
        expected.quotation_id(),
        "Quotation id mismatch for policy {}",
        expected.id()
    );
    assert_eq!(actual.owner(), expected.owner(), "Owner mismatch for policy {}", expected.id());
    assert_eq!(actual.period(), expected.period(), "Period mismatch for policy {}", expected.id());
    assert_eq!(
        actual.active_flag(),
        expected.active_flag(),
        "Active flag mismatch for policy {}",
        expected.id()
    );
}
