//! Repository for the `itinerary` table.

use planner_core::types::DbId;

use crate::models::itinerary::{CreateItineraryEntry, ItineraryEntry};
use crate::DbPool;

/// Column list for itinerary queries.
const ITINERARY_COLUMNS: &str =
    "id, date, time_slot, title, description, category, cost, booked, created_at";

/// Provides itinerary CRUD.
pub struct ItineraryRepo;

impl ItineraryRepo {
    /// All entries in trip order (date, then time slot).
    pub async fn list_all(pool: &DbPool) -> Result<Vec<ItineraryEntry>, sqlx::Error> {
        let query = format!("SELECT {ITINERARY_COLUMNS} FROM itinerary ORDER BY date, time_slot");
        sqlx::query_as::<_, ItineraryEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert an entry, returning the created row. Cost defaults to zero.
    pub async fn create(
        pool: &DbPool,
        input: &CreateItineraryEntry,
    ) -> Result<ItineraryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO itinerary (date, time_slot, title, description, category, cost) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {ITINERARY_COLUMNS}"
        );
        sqlx::query_as::<_, ItineraryEntry>(&query)
            .bind(input.date)
            .bind(&input.time_slot)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.cost.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM itinerary WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
