//! Policy handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use core_kernel::PolicyId;
use domain_policy::IssuePolicyCommand;

use crate::dto::policy::{IssuePolicyRequest, IssuePolicyResponse, PolicyDetailsResponse};
use crate::error::ApiError;
use crate::state::PolicyState;

/// Issues a policy against a quotation
pub async fn issue_policy(
    State(state): State<PolicyState>,
    payload: Result<Json<IssuePolicyRequest>, JsonRejection>,
) -> Result<Json<IssuePolicyResponse>, ApiError> {
    let Json(request) = payload?;
    let policy = state
        .orchestrator
        .issue_policy(IssuePolicyCommand::from(request))
        .await?;

    Ok(Json(IssuePolicyResponse::from_policy(&policy, state.clock.today())))
}

/// Gets an issued policy by id
pub async fn get_policy(
    State(state): State<PolicyState>,
    Path(id): Path<String>,
) -> Result<Json<PolicyDetailsResponse>, ApiError> {
    let not_found = || ApiError::NotFound(format!("Policy not found with ID: {}", id));

    let policy_id: PolicyId = id.parse().map_err(|_| not_found())?;
    let policy = state
        .orchestrator
        .find_policy(&policy_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(PolicyDetailsResponse::from_policy(&policy, state.clock.today())))
}
