use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub resort_id: DbId,
    pub member_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
}

/// A comment joined with the (optional) member's display name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentWithMember {
    pub id: DbId,
    pub resort_id: DbId,
    pub member_id: Option<DbId>,
    pub member_name: Option<String>,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub resort_id: DbId,
    pub member_id: Option<DbId>,
    pub content: String,
}
