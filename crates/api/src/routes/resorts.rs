use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Resort routes.
///
/// | Method | Path                          | Handler                |
/// |--------|-------------------------------|------------------------|
/// | GET    | `/resorts`                    | `list_resorts`         |
/// | GET    | `/resorts/{id}`               | `resort_detail`        |
/// | GET    | `/resorts/{id}/prices`        | `resort_prices`        |
/// | GET    | `/resorts/{id}/budget`        | `resort_budget`        |
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resorts", get(handlers::resorts::list_resorts))
        .route("/resorts/{id}", get(handlers::resorts::resort_detail))
        .route("/resorts/{id}/prices", get(handlers::resorts::resort_prices))
        .route("/resorts/{id}/budget", get(handlers::resorts::resort_budget))
}
