use planner_core::types::{DbId, Timestamp};
use planner_core::voting::RankedEntry;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `votes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vote {
    pub id: DbId,
    pub member_id: DbId,
    pub category: String,
    pub value: String,
    pub rank: i64,
    pub created_at: Timestamp,
}

/// A vote joined with the member's display name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VoteWithMember {
    pub id: DbId,
    pub member_id: DbId,
    pub member_name: String,
    pub category: String,
    pub value: String,
    pub rank: i64,
    pub created_at: Timestamp,
}

/// DTO for a single-vote upsert.
#[derive(Debug, Deserialize)]
pub struct CreateVote {
    pub member_id: DbId,
    pub category: String,
    pub value: String,
    pub rank: Option<i64>,
}

/// DTO for an atomic ranked submission: replaces every ballot the member has
/// in the category.
#[derive(Debug, Deserialize)]
pub struct RankedSubmission {
    pub member_id: DbId,
    pub category: String,
    pub rankings: Vec<RankedEntry>,
}
