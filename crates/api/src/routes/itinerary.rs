use axum::routing::{delete, get};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Itinerary routes.
///
/// | Method | Path              | Handler           |
/// |--------|-------------------|-------------------|
/// | GET    | `/itinerary`      | `list_entries`    |
/// | POST   | `/itinerary`      | `create_entry`    |
/// | DELETE | `/itinerary/{id}` | `delete_entry`    |
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/itinerary",
            get(handlers::itinerary::list_entries).post(handlers::itinerary::create_entry),
        )
        .route("/itinerary/{id}", delete(handlers::itinerary::delete_entry))
}
