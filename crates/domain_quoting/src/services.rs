//! Quoting use cases
//!
//! Application service behind the quoting HTTP surface: generate a quotation,
//! fetch one by id, list all of them.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use core_kernel::QuotationId;

use crate::error::QuotationError;
use crate::ports::QuotationStore;
use crate::quotation::{Quotation, QuotationFactory, QuotationInput};

/// Service orchestrating quotation generation and retrieval
#[derive(Clone)]
pub struct QuotationService {
    store: Arc<dyn QuotationStore>,
    factory: QuotationFactory,
}

impl QuotationService {
    pub fn new(store: Arc<dyn QuotationStore>, factory: QuotationFactory) -> Self {
        Self { store, factory }
    }

    /// Validates and prices the input, then stores the new quotation
    ///
    /// Nothing is stored when validation fails.
    #[instrument(skip(self, input), fields(species = ?input.species, age = input.age))]
    pub async fn generate(&self, input: QuotationInput) -> Result<Quotation, QuotationError> {
        let quotation = self.factory.create(input)?;
        let saved = self.store.save(quotation).await?;

        info!(
            quotation_id = %saved.id(),
            price = %saved.price(),
            expires_at = %saved.expires_at(),
            "Quotation generated"
        );
        Ok(saved)
    }

    /// Fetches a quotation; a miss is `Ok(None)`, not an error
    #[instrument(skip(self), fields(quotation_id = %id))]
    pub async fn get_by_id(&self, id: &QuotationId) -> Result<Option<Quotation>, QuotationError> {
        let found = self.store.find_by_id(id).await?;
        debug!(found = found.is_some(), "Quotation lookup");
        Ok(found)
    }

    /// Lists all quotations in store order
    pub async fn list_all(&self) -> Result<Vec<Quotation>, QuotationError> {
        Ok(self.store.find_all().await?)
    }

    /// The store backing this service
    pub fn store(&self) -> &Arc<dyn QuotationStore> {
        &self.store
    }
}
