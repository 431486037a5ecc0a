use chrono::NaiveDate;
use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `itinerary` table. Independent of resorts.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItineraryEntry {
    pub id: DbId,
    pub date: NaiveDate,
    pub time_slot: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cost: i64,
    pub booked: bool,
    pub created_at: Timestamp,
}

/// DTO for adding an itinerary entry.
#[derive(Debug, Deserialize)]
pub struct CreateItineraryEntry {
    pub date: NaiveDate,
    pub time_slot: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cost: Option<i64>,
}
