//! Quoting Domain
//!
//! Prices pet-insurance quotations and keeps them until a policy is issued
//! against them.
//!
//! # Architecture
//!
//! - **Pricing**: [`PricingEngine`], a fixed chain of decimal multipliers
//! - **Value Objects**: [`Quotation`], built only through [`QuotationFactory`]
//!   or [`Quotation::reconstruct`]
//! - **Ports**: [`QuotationStore`], with an in-memory adapter here and a
//!   PostgreSQL adapter in `infra_db`
//! - **Use cases**: [`QuotationService`]
//!
//! # Quotation Lifecycle
//!
//! ```text
//! Valid --(today passes expires_at)--> Expired
//! ```
//!
//! Expiry is derived from the date on every read; nothing ever mutates a
//! stored quotation.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quoting::{QuotationFactory, QuotationInput};
//!
//! let factory = QuotationFactory::new(Arc::new(SystemClock::default()));
//! let quotation = factory.create(QuotationInput {
//!     pet_name: Some("Max".into()),
//!     species: Some("DOG".into()),
//!     age: 3,
//!     ..Default::default()
//! })?;
//! assert_eq!(quotation.price(), dec!(12.0));
//! ```

pub mod pricing;
pub mod quotation;
pub mod ports;
pub mod services;
pub mod error;

pub use pricing::PricingEngine;
pub use quotation::{
    Quotation, QuotationFactory, QuotationInput, QuotationParts, MAX_INSURABLE_AGE,
    QUOTATION_VALIDITY_DAYS,
};
pub use ports::QuotationStore;
pub use ports::memory::InMemoryQuotationStore;
pub use services::QuotationService;
pub use error::QuotationError;
