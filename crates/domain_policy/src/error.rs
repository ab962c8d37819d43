//! Policy domain errors
//!
//! Failures of the issuance pipeline. Domain-rule failures carry the
//! offending quotation id; infrastructure failures pass through unchanged
//! as [`PortError`].

use thiserror::Error;

use core_kernel::{PortError, QuotationId};

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The quoting service has no quotation with this id
    #[error("Quotation not found with ID: {0}")]
    QuotationNotFound(QuotationId),

    /// The quotation exists but its expiry date has passed
    #[error("Quotation has expired with ID: {0}")]
    QuotationExpired(QuotationId),

    /// A required input was missing or malformed
    #[error("{0}")]
    InvalidArgument(String),

    /// Lookup, store or notifier failure
    #[error(transparent)]
    Port(#[from] PortError),
}

impl PolicyError {
    /// Creates an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PolicyError::InvalidArgument(message.into())
    }

    /// Returns true for failures the caller can fix by changing the request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PolicyError::Port(_))
    }
}
