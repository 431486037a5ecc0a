use planner_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `resorts` table.
///
/// For villas (`is_villa`), the nightly prices are whole-property and
/// `bedrooms`/`sleeps` are populated; for resorts they are per-room.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Resort {
    pub id: DbId,
    pub name: String,
    pub area: Option<String>,
    pub area_name: Option<String>,
    pub price_week1: i64,
    pub price_week2: i64,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub family: bool,
    pub accessible: bool,
    pub luxury: bool,
    pub adults_only: bool,
    pub is_villa: bool,
    pub bedrooms: Option<i64>,
    pub sleeps: Option<i64>,
    pub value_score: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
