//! Quotation handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use core_kernel::QuotationId;

use crate::dto::quotation::{CreateQuotationRequest, QuotationResponse};
use crate::error::ApiError;
use crate::state::QuotingState;

/// Prices and stores a new quotation
pub async fn create_quotation(
    State(state): State<QuotingState>,
    payload: Result<Json<CreateQuotationRequest>, JsonRejection>,
) -> Result<Json<QuotationResponse>, ApiError> {
    let Json(request) = payload?;
    let quotation = state.service.generate(request.into()).await?;

    Ok(Json(QuotationResponse::from_quotation(
        &quotation,
        state.clock.today(),
    )))
}

/// Lists every stored quotation
pub async fn list_quotations(
    State(state): State<QuotingState>,
) -> Result<Json<Vec<QuotationResponse>>, ApiError> {
    let today = state.clock.today();
    let quotations = state.service.list_all().await?;

    Ok(Json(
        quotations
            .iter()
            .map(|q| QuotationResponse::from_quotation(q, today))
            .collect(),
    ))
}

/// Gets a quotation by id
///
/// An unknown id answers 200 with an empty body; the policy service's
/// lookup client reads that as "not found".
pub async fn get_quotation(
    State(state): State<QuotingState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let found = state.service.get_by_id(&QuotationId::from(id)).await?;

    Ok(match found {
        Some(quotation) => {
            Json(QuotationResponse::from_quotation(&quotation, state.clock.today())).into_response()
        }
        None => StatusCode::OK.into_response(),
    })
}
