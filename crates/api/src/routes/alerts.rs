use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Price alert routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/alerts", post(handlers::alerts::create_alert))
}
