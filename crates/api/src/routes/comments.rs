use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Comment routes. Listing is part of the resort detail response.
pub fn router() -> Router<AppState> {
    Router::new().route("/comments", post(handlers::comments::create_comment))
}
