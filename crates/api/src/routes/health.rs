use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Health check route, mounted at the root (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
