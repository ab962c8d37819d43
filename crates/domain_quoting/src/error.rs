//! Quoting domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the quoting domain
#[derive(Debug, Error)]
pub enum QuotationError {
    /// The pet is older than the maximum insurable age
    #[error("Pets older than {max_age} years cannot be insured")]
    InvalidAge {
        max_age: u8,
    },

    /// An input field failed validation
    #[error("{0}")]
    InvalidArgument(String),

    /// The quotation store failed
    #[error(transparent)]
    Store(#[from] PortError),
}

impl QuotationError {
    /// Creates an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        QuotationError::InvalidArgument(message.into())
    }

    /// Returns true for failures caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuotationError::InvalidAge { .. } | QuotationError::InvalidArgument(_)
        )
    }
}
