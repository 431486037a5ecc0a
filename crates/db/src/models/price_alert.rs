use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `price_alerts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PriceAlert {
    pub id: DbId,
    pub email: String,
    pub resort_id: Option<DbId>,
    pub threshold: i64,
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for an alert signup.
#[derive(Debug, Deserialize)]
pub struct CreatePriceAlert {
    pub email: String,
    pub resort_id: Option<DbId>,
    pub threshold: i64,
}

/// An active alert whose threshold a day's price met or beat.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TriggeredAlert {
    pub email: String,
    pub threshold: i64,
    pub resort_name: String,
    pub price: i64,
}
