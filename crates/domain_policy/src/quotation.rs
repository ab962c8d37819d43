//! The policy service's view of a quotation
//!
//! A snapshot is a transient copy fetched from the quoting service for a
//! single issuance request. The quoting service owns the authoritative
//! record, so the snapshot is rebuilt as received without re-validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{utc_today, QuotationId};

/// Read-only copy of a quotation owned by the quoting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSnapshot {
    pub id: QuotationId,
    pub pet_name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: i32,
    pub premium_plan: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub expires_at: NaiveDate,
}

impl QuotationSnapshot {
    /// Rebuilds a snapshot from fields received over the wire
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: QuotationId,
        pet_name: Option<String>,
        species: Option<String>,
        breed: Option<String>,
        age: i32,
        premium_plan: bool,
        price: Decimal,
        expires_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            pet_name,
            species,
            breed,
            age,
            premium_plan,
            price,
            expires_at,
        }
    }

    /// True iff the expiry date is strictly before `today`
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expires_at < today
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_on(utc_today())
    }
}
