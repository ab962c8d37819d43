//! Adapters owned by the policy service
//!
//! - [`quoting_http`]: [`QuotationLookupClient`](crate::ports::QuotationLookupClient)
//!   over HTTP to the quoting service
//! - [`logging_notifier`]: [`EventNotifier`](crate::ports::EventNotifier)
//!   that writes the event to the log

pub mod quoting_http;
pub mod logging_notifier;

pub use quoting_http::{HttpQuotationLookupClient, QuotingClientConfig};
pub use logging_notifier::LoggingEventNotifier;
