use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use soletrack_core::AggregateError;
use tracing::error;

#[derive(Debug)]
pub(crate) enum AppError {
    Aggregate(AggregateError),
}

impl From<AggregateError> for AppError {
    fn from(err: AggregateError) -> Self {
        Self::Aggregate(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let message = match self {
            AppError::Aggregate(err) => {
                error!(error = %err, "aggregation error");
                "aggregation error"
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
