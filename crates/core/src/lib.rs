//! Pure domain logic for the vacation planner.
//!
//! Everything in this crate is synchronous and side-effect free: the deal
//! classifier, the budget calculator, and the ranked-choice tally operate on
//! plain inputs supplied by the caller, so they can be unit tested without a
//! database.

pub mod budget;
pub mod deals;
pub mod error;
pub mod types;
pub mod validation;
pub mod voting;
