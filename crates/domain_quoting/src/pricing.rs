//! Premium pricing rules
//!
//! The price of a quotation is a fixed chain of multipliers applied to a
//! base price. The order of the chain is part of the contract:
//!
//! ```text
//! base (10) -> species (DOG x1.2, other x1.1) -> age > 5 (x1.5) -> premium plan (x2)
//! ```
//!
//! No intermediate rounding is applied; the result keeps the scale produced
//! by the successive decimal multiplications.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Starting price before any multiplier
pub const BASE_PRICE: Decimal = dec!(10);

/// Multiplier for dogs
pub const DOG_MULTIPLIER: Decimal = dec!(1.2);

/// Multiplier for any species other than dogs
pub const OTHER_SPECIES_MULTIPLIER: Decimal = dec!(1.1);

/// Pets strictly older than this pay the senior surcharge
pub const SENIOR_AGE_THRESHOLD: i32 = 5;

/// Multiplier for senior pets
pub const SENIOR_MULTIPLIER: Decimal = dec!(1.5);

/// Multiplier for the premium plan
pub const PREMIUM_PLAN_MULTIPLIER: Decimal = dec!(2);

/// Deterministic rule engine computing quotation prices
///
/// Inputs are assumed to be validated upstream, so pricing is a total
/// function with no failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Computes the price for a pet
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_quoting::PricingEngine;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = PricingEngine::new().price("DOG", 8, true);
    /// assert_eq!(price, dec!(36.00));
    /// ```
    pub fn price(&self, species: &str, age: i32, premium_plan: bool) -> Decimal {
        let mut price = BASE_PRICE * Self::species_multiplier(species);

        if age > SENIOR_AGE_THRESHOLD {
            price *= SENIOR_MULTIPLIER;
        }

        if premium_plan {
            price *= PREMIUM_PLAN_MULTIPLIER;
        }

        price
    }

    /// Returns the species multiplier; "DOG" is matched case-insensitively
    pub fn species_multiplier(species: &str) -> Decimal {
        if species.eq_ignore_ascii_case("DOG") {
            DOG_MULTIPLIER
        } else {
            OTHER_SPECIES_MULTIPLIER
        }
    }
}
