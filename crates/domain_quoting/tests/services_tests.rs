//! Quotation Service Tests
//!
//! Exercises the use cases against the in-memory store and a store that
//! always fails.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use core_kernel::{
    DomainPort, FixedClock, HealthCheckResult, HealthCheckable, PortError, QuotationId,
};
use domain_quoting::{
    InMemoryQuotationStore, Quotation, QuotationError, QuotationFactory, QuotationInput,
    QuotationService, QuotationStore,
};
use rust_decimal_macros::dec;
use test_utils::QuotationFixtures;

struct UnavailableStore;

impl DomainPort for UnavailableStore {}

#[async_trait]
impl HealthCheckable for UnavailableStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("unavailable")
    }
}

#[async_trait]
impl QuotationStore for UnavailableStore {
    async fn save(&self, _quotation: Quotation) -> Result<Quotation, PortError> {
        Err(PortError::connection("database down"))
    }

    async fn find_by_id(&self, _id: &QuotationId) -> Result<Option<Quotation>, PortError> {
        Err(PortError::connection("database down"))
    }

    async fn find_all(&self) -> Result<Vec<Quotation>, PortError> {
        Err(PortError::connection("database down"))
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn service_with(store: Arc<dyn QuotationStore>) -> QuotationService {
    QuotationService::new(store, QuotationFactory::new(Arc::new(FixedClock(today()))))
}

fn dog(age: i32) -> QuotationInput {
    QuotationInput {
        pet_name: Some("Max".to_string()),
        species: Some("DOG".to_string()),
        breed: None,
        age,
        premium_plan: false,
    }
}

#[tokio::test]
async fn test_generate_persists_quotation() {
    let store = InMemoryQuotationStore::new();
    let service = service_with(Arc::new(store.clone()));

    let quotation = service.generate(QuotationFixtures::young_dog()).await.unwrap();

    assert_eq!(quotation.price(), dec!(12.00));
    assert_eq!(quotation.breed(), Some("Labrador"));
    assert_eq!(store.len().await, 1);
    let stored = service.get_by_id(quotation.id()).await.unwrap();
    assert_eq!(stored, Some(quotation));
}

#[tokio::test]
async fn test_rejected_input_is_not_persisted() {
    let store = InMemoryQuotationStore::new();
    let service = service_with(Arc::new(store.clone()));

    let err = service.generate(dog(11)).await.unwrap_err();

    assert!(matches!(err, QuotationError::InvalidAge { max_age: 10 }));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_unknown_id_is_none() {
    let service = service_with(Arc::new(InMemoryQuotationStore::new()));

    let found = service.get_by_id(&QuotationId::from("nope")).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_all_returns_generated_quotations_in_order() {
    let service = service_with(Arc::new(InMemoryQuotationStore::new()));

    let first = service.generate(dog(2)).await.unwrap();
    let second = service.generate(dog(7)).await.unwrap();

    let all = service.list_all().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
async fn test_list_all_on_empty_store() {
    let service = service_with(Arc::new(InMemoryQuotationStore::new()));
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let service = service_with(Arc::new(UnavailableStore));

    let err = service.generate(dog(3)).await.unwrap_err();

    assert!(matches!(err, QuotationError::Store(PortError::Connection { .. })));
    assert!(!err.is_validation());
    assert!(service.list_all().await.is_err());
}
