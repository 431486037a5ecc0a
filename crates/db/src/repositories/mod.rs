//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod alert_repo;
pub mod comment_repo;
pub mod comparison_repo;
pub mod family_repo;
pub mod itinerary_repo;
pub mod price_repo;
pub mod resort_repo;
pub mod vote_repo;

pub use alert_repo::AlertRepo;
pub use comment_repo::CommentRepo;
pub use comparison_repo::ComparisonRepo;
pub use family_repo::FamilyRepo;
pub use itinerary_repo::ItineraryRepo;
pub use price_repo::PriceRepo;
pub use resort_repo::{HiddenCostRepo, ResortRepo};
pub use vote_repo::VoteRepo;
