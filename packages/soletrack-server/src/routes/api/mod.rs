use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

mod data;
mod summary;

pub(crate) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/data", data::router())
        .nest("/summary", summary::router())
}
