use crate::api_error::ApiError;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use dinefind_core::{MAX_RESULTS, QueryOutcome};
use dinefind_service::RecommendParams;

use crate::AppState;
use crate::response_types::StatsResponse;

/// `GET /recommend` — filter, rank and return at most [`MAX_RESULTS`] restaurants.
///
/// `ok` and `no_results` outcomes are 200; a malformed parameter is 400 and an
/// engine error is 422, both with an error-outcome body.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RecommendParams>, QueryRejection>,
) -> Result<Json<QueryOutcome>, ApiError> {
    let Query(params) = query?;
    tracing::debug!(?params, "recommend request");

    outcome_response(state.recommend_service.recommend_params(params).await?)
}

/// Error outcomes become 422; `ok` and `no_results` pass through as 200.
fn outcome_response(outcome: QueryOutcome) -> Result<Json<QueryOutcome>, ApiError> {
    match outcome {
        QueryOutcome::Error { message } => {
            tracing::warn!(%message, "recommend query failed");
            Err(ApiError::UnprocessableEntity(message))
        },
        outcome => Ok(Json(outcome)),
    }
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse { table: state.recommend_service.stats(), max_results: MAX_RESULTS })
}
