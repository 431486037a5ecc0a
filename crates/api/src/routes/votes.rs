use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Voting routes.
///
/// | Method | Path             | Handler         |
/// |--------|------------------|-----------------|
/// | GET    | `/votes`         | `list_votes`    |
/// | POST   | `/votes`         | `submit_vote`   |
/// | POST   | `/votes/ranked`  | `submit_ranked` |
/// | GET    | `/votes/results` | `vote_results`  |
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/votes",
            get(handlers::votes::list_votes).post(handlers::votes::submit_vote),
        )
        .route("/votes/ranked", post(handlers::votes::submit_ranked))
        .route("/votes/results", get(handlers::votes::vote_results))
}
