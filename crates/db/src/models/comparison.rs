use planner_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `comparisons` table: an opaque short id mapping to a JSON
/// array of resort ids. Immutable once created.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comparison {
    pub id: String,
    pub resort_ids: String,
    pub created_at: Timestamp,
}
