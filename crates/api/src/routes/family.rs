use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Family member routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/family", get(handlers::family::list_members))
}
