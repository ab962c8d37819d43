//! Test Data Builders
//!
//! Builders for domain values with sensible defaults, so a test only spells
//! out the fields it cares about. Stored values go through the domains'
//! reconstruction paths, so a builder can never produce an invalid value.

use chrono::NaiveDate;
use core_kernel::{PolicyId, QuotationId};
use domain_policy::{Owner, Policy, QuotationSnapshot};
use domain_quoting::{Quotation, QuotationParts};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{DateFixtures, OwnerFixtures};

/// Builder for stored quotations
pub struct QuotationBuilder {
    parts: QuotationParts,
}

impl Default for QuotationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotationBuilder {
    pub fn new() -> Self {
        Self {
            parts: QuotationParts {
                id: QuotationId::generate(),
                pet_name: "Max".to_string(),
                species: "DOG".to_string(),
                breed: None,
                age: 3,
                premium_plan: false,
                price: dec!(12.0),
                expires_at: DateFixtures::quotation_expiry(),
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<QuotationId>) -> Self {
        self.parts.id = id.into();
        self
    }

    pub fn with_pet_name(mut self, name: impl Into<String>) -> Self {
        self.parts.pet_name = name.into();
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.parts.species = species.into();
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.parts.breed = Some(breed.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.parts.age = age;
        self
    }

    pub fn with_premium_plan(mut self, premium: bool) -> Self {
        self.parts.premium_plan = premium;
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.parts.price = price;
        self
    }

    pub fn expiring_on(mut self, date: NaiveDate) -> Self {
        self.parts.expires_at = date;
        self
    }

    /// Expiry date of yesterday relative to [`DateFixtures::today`]
    pub fn expired(self) -> Self {
        self.expiring_on(DateFixtures::yesterday())
    }

    /// Builds the quotation
    ///
    /// # Panics
    ///
    /// Panics if the fields break a quotation invariant
    pub fn build(self) -> Quotation {
        Quotation::reconstruct(self.parts).expect("builder produced an invalid quotation")
    }

    /// The policy service's view of the same quotation
    pub fn build_snapshot(self) -> QuotationSnapshot {
        let p = self.parts;
        QuotationSnapshot::reconstruct(
            p.id,
            Some(p.pet_name),
            Some(p.species),
            p.breed,
            p.age,
            p.premium_plan,
            p.price,
            p.expires_at,
        )
    }
}

/// Builder for stored policies
pub struct PolicyBuilder {
    id: PolicyId,
    quotation_id: QuotationId,
    owner: Owner,
    start_date: NaiveDate,
    end_date: NaiveDate,
    active: bool,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            id: PolicyId::new(),
            quotation_id: QuotationId::generate(),
            owner: OwnerFixtures::john(),
            start_date: DateFixtures::today(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            active: true,
        }
    }

    pub fn with_id(mut self, id: PolicyId) -> Self {
        self.id = id;
        self
    }

    pub fn with_quotation_id(mut self, id: impl Into<QuotationId>) -> Self {
        self.quotation_id = id.into();
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = owner;
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// # Panics
    ///
    /// Panics if the end date is before the start date
    pub fn build(self) -> Policy {
        Policy::reconstruct(
            self.id,
            self.quotation_id,
            self.owner,
            self.start_date,
            self.end_date,
            self.active,
        )
        .expect("builder produced an invalid policy")
    }
}
