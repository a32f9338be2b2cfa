use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use soletrack_core::hourly_view;
use std::sync::Arc;

pub(crate) fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(data_handler))
}

async fn data_handler(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let view = hourly_view(&state.readings)?;
    Ok((StatusCode::OK, Json(view)))
}
