//! Route definitions, grouped by domain.
//!
//! Each module exposes a `router()` returning the routes for that domain;
//! [`api_routes`] assembles them under a common prefix. Handler bodies live
//! in [`crate::handlers`].

pub mod alerts;
pub mod comments;
pub mod compare;
pub mod family;
pub mod health;
pub mod itinerary;
pub mod resorts;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// All versioned API routes, nested under `/api/v1` by the top-level router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(resorts::router())
        .merge(family::router())
        .merge(votes::router())
        .merge(comments::router())
        .merge(alerts::router())
        .merge(compare::router())
        .merge(itinerary::router())
}
