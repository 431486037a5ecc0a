use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Comparison routes.
///
/// | Method | Path            | Handler            |
/// |--------|-----------------|--------------------|
/// | GET    | `/compare`      | `compare_resorts`  |
/// | POST   | `/compare`      | `save_comparison`  |
/// | GET    | `/compare/{id}` | `saved_comparison` |
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/compare",
            get(handlers::compare::compare_resorts).post(handlers::compare::save_comparison),
        )
        .route("/compare/{id}", get(handlers::compare::saved_comparison))
}
