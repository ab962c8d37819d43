//! Quotation DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::QuotationId;
use domain_quoting::{Quotation, QuotationInput};

/// Body of `POST /quotations`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotationRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub premium: bool,
}

impl From<CreateQuotationRequest> for QuotationInput {
    fn from(request: CreateQuotationRequest) -> Self {
        QuotationInput {
            pet_name: request.name,
            species: request.species,
            breed: request.breed,
            age: request.age,
            premium_plan: request.premium,
        }
    }
}

/// A quotation as returned by the quoting service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationResponse {
    pub id: QuotationId,
    pub pet_name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: u8,
    pub premium_plan: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub expires_at: NaiveDate,
    pub expired: bool,
}

impl QuotationResponse {
    /// Renders a quotation, evaluating expiry against `today`
    pub fn from_quotation(quotation: &Quotation, today: NaiveDate) -> Self {
        Self {
            id: quotation.id().clone(),
            pet_name: quotation.pet_name().to_string(),
            species: quotation.species().to_string(),
            breed: quotation.breed().map(str::to_string),
            age: quotation.age(),
            premium_plan: quotation.premium_plan(),
            price: quotation.price(),
            expires_at: quotation.expires_at(),
            expired: quotation.is_expired_on(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_age_and_premium_default() {
        let request: CreateQuotationRequest =
            serde_json::from_str(r#"{"name": "Max", "species": "DOG"}"#).unwrap();

        let input = QuotationInput::from(request);
        assert_eq!(input.age, 0);
        assert!(!input.premium_plan);
        assert_eq!(input.breed, None);
    }
}
