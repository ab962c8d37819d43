//! The Quotation value and its factory
//!
//! A quotation is an immutable, priced offer to insure a pet. It can only be
//! obtained through [`QuotationFactory::create`] (new quotes) or
//! [`Quotation::reconstruct`] (rows loaded from storage); both paths run the
//! same validation, so an invalid quotation can never exist.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use core_kernel::{utc_today, Clock, QuotationId};

use crate::error::QuotationError;
use crate::pricing::PricingEngine;

/// Oldest insurable age, inclusive
pub const MAX_INSURABLE_AGE: u8 = 10;

/// Days a quotation stays valid after creation
pub const QUOTATION_VALIDITY_DAYS: u64 = 30;

/// Raw input for a new quotation, as received from a client
///
/// Text fields are optional because callers may omit them; validation
/// reports a missing field exactly like a blank one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotationInput {
    pub pet_name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: i32,
    pub premium_plan: bool,
}

/// Persisted fields of a quotation, used to rebuild it from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationParts {
    pub id: QuotationId,
    pub pet_name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: i32,
    pub premium_plan: bool,
    pub price: Decimal,
    pub expires_at: NaiveDate,
}

/// An immutable priced offer to insure a pet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotation {
    id: QuotationId,
    pet_name: String,
    species: String,
    breed: Option<String>,
    age: u8,
    premium_plan: bool,
    price: Decimal,
    expires_at: NaiveDate,
}

impl Quotation {
    /// Rebuilds a quotation from already persisted fields
    ///
    /// The invariants are checked again, but neither the price nor the
    /// expiry date is recomputed.
    pub fn reconstruct(parts: QuotationParts) -> Result<Self, QuotationError> {
        let age = validate_age(parts.age)?;
        validate_text(Some(&parts.pet_name), "Pet name cannot be null or empty")?;
        validate_text(Some(&parts.species), "Species cannot be null or empty")?;
        validate_price(Some(parts.price))?;

        Ok(Self {
            id: parts.id,
            pet_name: parts.pet_name,
            species: parts.species,
            breed: parts.breed,
            age,
            premium_plan: parts.premium_plan,
            price: parts.price,
            expires_at: parts.expires_at,
        })
    }

    pub fn id(&self) -> &QuotationId {
        &self.id
    }

    pub fn pet_name(&self) -> &str {
        &self.pet_name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn premium_plan(&self) -> bool {
        self.premium_plan
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn expires_at(&self) -> NaiveDate {
        self.expires_at
    }

    /// Returns true if the expiry date is strictly before `today`
    ///
    /// A quotation is still valid on its expiry date.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expires_at < today
    }

    /// Expiry check against the current UTC date
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(utc_today())
    }
}

/// Validates raw input, prices it and builds new quotations
#[derive(Clone)]
pub struct QuotationFactory {
    pricing: PricingEngine,
    clock: Arc<dyn Clock>,
}

impl QuotationFactory {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            pricing: PricingEngine::new(),
            clock,
        }
    }

    pub fn with_pricing(mut self, pricing: PricingEngine) -> Self {
        self.pricing = pricing;
        self
    }

    /// Creates a new quotation
    ///
    /// Assigns a fresh id and sets the expiry to today plus
    /// [`QUOTATION_VALIDITY_DAYS`].
    ///
    /// # Errors
    ///
    /// - `InvalidAge` when the age is above [`MAX_INSURABLE_AGE`]
    /// - `InvalidArgument` for a negative age, a missing or blank pet name
    ///   or species, or a negative price
    pub fn create(&self, input: QuotationInput) -> Result<Quotation, QuotationError> {
        let age = validate_age(input.age)?;
        let pet_name = validate_text(input.pet_name.as_deref(), "Pet name cannot be null or empty")?;
        let species = validate_text(input.species.as_deref(), "Species cannot be null or empty")?;

        let price = self.pricing.price(species, input.age, input.premium_plan);
        validate_price(Some(price))?;

        let expires_at = self
            .clock
            .today()
            .checked_add_days(Days::new(QUOTATION_VALIDITY_DAYS))
            .ok_or_else(|| QuotationError::invalid_argument("Expiry date out of range"))?;

        Ok(Quotation {
            id: QuotationId::generate(),
            pet_name: pet_name.to_string(),
            species: species.to_string(),
            breed: input.breed,
            age,
            premium_plan: input.premium_plan,
            price,
            expires_at,
        })
    }
}

impl std::fmt::Debug for QuotationFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuotationFactory")
            .field("pricing", &self.pricing)
            .finish_non_exhaustive()
    }
}

fn validate_age(age: i32) -> Result<u8, QuotationError> {
    if age > i32::from(MAX_INSURABLE_AGE) {
        return Err(QuotationError::InvalidAge {
            max_age: MAX_INSURABLE_AGE,
        });
    }
    u8::try_from(age).map_err(|_| QuotationError::invalid_argument("Pet age cannot be negative"))
}

fn validate_text<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, QuotationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(QuotationError::invalid_argument(message)),
    }
}

// Price is computed internally, so this only guards against a broken rule.
fn validate_price(price: Option<Decimal>) -> Result<Decimal, QuotationError> {
    match price {
        Some(price) if price >= Decimal::ZERO => Ok(price),
        _ => Err(QuotationError::invalid_argument("Price cannot be null or negative")),
    }
}
