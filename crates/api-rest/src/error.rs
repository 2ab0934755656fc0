use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use precis_charts::ChartError;
use precis_core::SummaryError;

/// Errors returned by REST handlers.
///
/// Validation problems map to `400 Bad Request` with a short explanation. Everything else is a
/// `500` whose details only go to the log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SummaryError> for ApiError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::MissingField(field) => ApiError::MissingField(field),
            SummaryError::InvalidInput(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        ApiError::Internal(format!("chart rendering failed: {err}"))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("summarise task failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingField(_) | ApiError::BadRequest(_) => {
                tracing::info!("rejected request: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!("{msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
