//! Pre-built Test Fixtures
//!
//! Fixed, predictable values shared by unit and integration tests.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use core_kernel::{Clock, FixedClock};
use domain_policy::Owner;
use domain_quoting::QuotationInput;

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// The "today" used by most tests
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    pub fn yesterday() -> NaiveDate {
        Self::today() - Days::new(1)
    }

    /// Expiry date of a quotation created today
    pub fn quotation_expiry() -> NaiveDate {
        Self::today() + Days::new(30)
    }

    /// Clock pinned to [`DateFixtures::today`]
    pub fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(Self::today()))
    }
}

/// Fixture for quotation requests
pub struct QuotationFixtures;

impl QuotationFixtures {
    /// Max, a 3 year old dog on the standard plan (price 12.00)
    pub fn young_dog() -> QuotationInput {
        QuotationInput {
            pet_name: Some("Max".to_string()),
            species: Some("DOG".to_string()),
            breed: Some("Labrador".to_string()),
            age: 3,
            premium_plan: false,
        }
    }

    /// Luna, a 2 year old cat on the standard plan (price 11.00)
    pub fn young_cat() -> QuotationInput {
        QuotationInput {
            pet_name: Some("Luna".to_string()),
            species: Some("CAT".to_string()),
            breed: None,
            age: 2,
            premium_plan: false,
        }
    }

    /// Rex, an 8 year old dog on the premium plan (price 36.00)
    pub fn old_dog_premium() -> QuotationInput {
        QuotationInput {
            pet_name: Some("Rex".to_string()),
            species: Some("DOG".to_string()),
            breed: None,
            age: 8,
            premium_plan: true,
        }
    }

    /// A dog one year past the insurable age
    pub fn too_old() -> QuotationInput {
        QuotationInput {
            age: 11,
            ..Self::young_dog()
        }
    }
}

/// Fixture for policyholders
pub struct OwnerFixtures;

impl OwnerFixtures {
    pub fn john() -> Owner {
        Owner::new("o1", "John", "j@x.com")
    }
}
