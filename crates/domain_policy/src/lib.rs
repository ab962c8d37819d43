//! Policy Domain
//!
//! Issues pet-insurance policies against quotations held by the quoting
//! service, following Hexagonal Architecture: the issuance pipeline only
//! sees port traits and never the adapters behind them.
//!
//! # Architecture
//!
//! - **Values**: [`Policy`], [`Owner`], [`QuotationSnapshot`]
//! - **Factory**: [`PolicyFactory`], fixing a one-year validity window
//! - **Domain Events**: [`PolicyIssuedEvent`]
//! - **Orchestration**: [`PolicyIssuanceOrchestrator`]
//! - **Ports**: [`QuotationLookupClient`], [`PolicyStore`], [`EventNotifier`]
//! - **Adapters**: [`HttpQuotationLookupClient`], [`LoggingEventNotifier`],
//!   [`InMemoryPolicyStore`]
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{IssuePolicyCommand, PolicyIssuanceOrchestrator};
//!
//! let policy = orchestrator
//!     .issue_policy(IssuePolicyCommand::new(quotation_id, "o1", "John", "j@x.com"))
//!     .await?;
//! assert!(policy.is_active());
//! ```

pub mod owner;
pub mod quotation;
pub mod policy;
pub mod events;
pub mod ports;
pub mod adapters;
pub mod services;
pub mod error;

pub use owner::Owner;
pub use quotation::QuotationSnapshot;
pub use policy::{Policy, PolicyFactory, POLICY_TERM_YEARS};
pub use events::PolicyIssuedEvent;
pub use ports::{EventNotifier, PolicyStore, QuotationLookupClient};
pub use ports::memory::InMemoryPolicyStore;
pub use adapters::{HttpQuotationLookupClient, LoggingEventNotifier, QuotingClientConfig};
pub use services::{IssuePolicyCommand, PolicyIssuanceOrchestrator};
pub use error::PolicyError;
