//! Property-Based Test Generators
//!
//! Proptest strategies for quotation inputs, plus `fake`-backed owners for
//! tests that only need plausible data.

use chrono::{Days, NaiveDate};
use domain_policy::Owner;
use domain_quoting::{QuotationInput, MAX_INSURABLE_AGE};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, Name};
use fake::Fake;
use proptest::prelude::*;

/// Strategy for species names, mixing dogs in several casings with others
pub fn species_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("DOG".to_string()),
        Just("dog".to_string()),
        Just("Dog".to_string()),
        Just("CAT".to_string()),
        Just("RABBIT".to_string()),
        "[A-Za-z]{1,16}",
    ]
}

/// Strategy for ages that can be insured (0 to 10)
pub fn insurable_age_strategy() -> impl Strategy<Value = i32> {
    0..=i32::from(MAX_INSURABLE_AGE)
}

/// Strategy for ages above the insurable limit
pub fn too_old_age_strategy() -> impl Strategy<Value = i32> {
    (i32::from(MAX_INSURABLE_AGE) + 1)..200
}

/// Strategy for negative ages
pub fn negative_age_strategy() -> impl Strategy<Value = i32> {
    -200..0
}

/// Strategy for strings that are empty after trimming
pub fn blank_string_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

/// Strategy for non-blank pet names
pub fn pet_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}"
}

/// Strategy for quotation inputs that pass validation
pub fn valid_quotation_input_strategy() -> impl Strategy<Value = QuotationInput> {
    (
        pet_name_strategy(),
        species_strategy(),
        proptest::option::of("[A-Za-z ]{1,20}"),
        insurable_age_strategy(),
        any::<bool>(),
    )
        .prop_map(|(name, species, breed, age, premium_plan)| QuotationInput {
            pet_name: Some(name),
            species: Some(species),
            breed,
            age,
            premium_plan,
        })
}

/// Strategy for calendar dates between 2000 and roughly 2050
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..18_250).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(offset)
    })
}

/// A policyholder with a generated name and email
pub fn fake_owner() -> Owner {
    let first: String = FirstName().fake();
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    Owner::new(format!("owner-{}", first.to_lowercase()), name, email)
}
