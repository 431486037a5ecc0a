//! Row structs and DTOs, one module per table.

pub mod comment;
pub mod comparison;
pub mod family_member;
pub mod hidden_costs;
pub mod itinerary;
pub mod price_alert;
pub mod price_history;
pub mod resort;
pub mod vote;
