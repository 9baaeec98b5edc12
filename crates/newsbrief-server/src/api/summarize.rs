use axum::{
    extract::{Query, State},
    Extension, Json,
};
use newsbrief_core::SummarizeResponse;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SummarizeQuery {
    pub company: Option<String>,
}

pub(super) async fn summarize_company(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SummarizeQuery>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let company = query
        .company
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "bad_request",
                "query parameter `company` is required",
            )
        })?;

    tracing::info!(request_id = %req_id.0, company, "summarize requested");

    let response = if state.validate_company {
        state.pipeline.summarize(state.checker.as_ref(), company).await
    } else {
        SummarizeResponse::Report(state.pipeline.run(company).await)
    };

    Ok(Json(response))
}
