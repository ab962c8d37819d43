//! Policy DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{PolicyId, QuotationId};
use domain_policy::{IssuePolicyCommand, Policy};

/// Body of `POST /policies`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePolicyRequest {
    pub quotation_id: Option<String>,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl From<IssuePolicyRequest> for IssuePolicyCommand {
    fn from(request: IssuePolicyRequest) -> Self {
        IssuePolicyCommand {
            quotation_id: QuotationId::from(request.quotation_id.unwrap_or_default()),
            owner_id: request.owner_id,
            owner_name: request.owner_name,
            owner_email: request.owner_email,
        }
    }
}

/// Response of `POST /policies`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePolicyResponse {
    pub policy_id: PolicyId,
    pub quotation_id: QuotationId,
    pub active: bool,
}

impl IssuePolicyResponse {
    pub fn from_policy(policy: &Policy, today: NaiveDate) -> Self {
        Self {
            policy_id: policy.id(),
            quotation_id: policy.quotation_id().clone(),
            active: policy.is_active_on(today),
        }
    }
}

/// Response of `GET /policies/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDetailsResponse {
    pub policy_id: PolicyId,
    pub quotation_id: QuotationId,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
}

impl PolicyDetailsResponse {
    pub fn from_policy(policy: &Policy, today: NaiveDate) -> Self {
        Self {
            policy_id: policy.id(),
            quotation_id: policy.quotation_id().clone(),
            owner_id: policy.owner().id().to_string(),
            owner_name: policy.owner().name().to_string(),
            owner_email: policy.owner().email().to_string(),
            start_date: policy.start_date(),
            end_date: policy.end_date(),
            active: policy.is_active_on(today),
        }
    }
}
