//! Request handlers, grouped by domain. Routing lives in [`crate::routes`].

pub mod alerts;
pub mod comments;
pub mod compare;
pub mod family;
pub mod health;
pub mod itinerary;
pub mod resorts;
pub mod votes;
