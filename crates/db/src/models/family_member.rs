use planner_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `family_members` table. Seeded once, never deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FamilyMember {
    pub id: DbId,
    pub name: String,
    pub group_name: Option<String>,
    pub created_at: Timestamp,
}
