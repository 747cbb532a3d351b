use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use crate::analysis::AnalysisError;
use crate::content::ArticleRole;

use super::TRUSTLENS_STATUS_HEADER;
use super::error::GatewayError;
use super::payload::{AnalyzeRequest, ClaimReviewRequest, HealthResponse, PublishResponse};
use super::state::AppState;

fn decode<T: DeserializeOwned>(
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<T, GatewayError> {
    let Json(body) = body.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

fn ok_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TRUSTLENS_STATUS_HEADER, HeaderValue::from_static("ok"));
    headers
}

#[instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, ok_headers(), Json(HealthResponse { status: "ok" })).into_response()
}

#[instrument(skip_all, fields(depth = tracing::field::Empty))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let request: AnalyzeRequest = decode(body)?;
    tracing::Span::current().record("depth", tracing::field::display(request.depth));

    let subject = request.subject_content.ok_or(AnalysisError::InputMissing {
        role: ArticleRole::Subject,
    })?;
    let reference = request.reference_content.ok_or(AnalysisError::InputMissing {
        role: ArticleRole::Reference,
    })?;

    let result = state
        .analyzer
        .analyze(&subject, &reference, request.depth)
        .await?;

    info!(
        overall_score = result.summary.overall_score,
        verdict = %result.summary.verdict,
        "Analysis complete"
    );
    Ok((StatusCode::OK, ok_headers(), Json(result)).into_response())
}

#[instrument(skip_all, fields(topic = tracing::field::Empty))]
pub async fn claim_review_handler(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let request: ClaimReviewRequest = decode(body)?;
    tracing::Span::current().record("topic", tracing::field::display(&request.topic));

    if request.topic.trim().is_empty() {
        return Err(GatewayError::InvalidRequest("topic must not be empty".to_string()));
    }

    let review = state.assembler.build(
        &request.analysis_result,
        &request.subject_content,
        &request.reference_content,
        &request.topic,
    );
    let receipt = state.ledger.publish(&review).await?;

    Ok((
        StatusCode::OK,
        ok_headers(),
        Json(PublishResponse {
            success: true,
            locator: receipt.locator,
            explorer_url: receipt.explorer_url,
            transaction_hash: receipt.transaction_hash,
            claim_review: review,
        }),
    )
        .into_response())
}
