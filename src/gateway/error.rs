use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::ledger::LedgerError;

use super::TRUSTLENS_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Publish(#[from] LedgerError),
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    /// HTTP status and short machine-readable status label.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::Analysis(AnalysisError::InputMissing { .. }) => {
                (StatusCode::BAD_REQUEST, "input_missing")
            }
            GatewayError::Analysis(AnalysisError::OracleCallFailed { .. }) => {
                (StatusCode::BAD_GATEWAY, "oracle_error")
            }
            GatewayError::Analysis(AnalysisError::OracleResponseMalformed { .. }) => {
                (StatusCode::BAD_GATEWAY, "oracle_malformed")
            }
            GatewayError::Publish(_) => (StatusCode::BAD_GATEWAY, "publish_error"),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, label) = self.status();

        let mut headers = HeaderMap::new();
        headers.insert(TRUSTLENS_STATUS_HEADER, HeaderValue::from_static(label));

        // Display never includes the malformed-response excerpt; that stays in the logs.
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
