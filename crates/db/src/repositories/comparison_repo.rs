//! Repository for the `comparisons` table.

use crate::models::comparison::Comparison;
use crate::DbPool;

/// Column list for comparisons queries.
const COMPARISON_COLUMNS: &str = "id, resort_ids, created_at";

/// Provides saved-comparison creation and lookup. Rows are immutable.
pub struct ComparisonRepo;

impl ComparisonRepo {
    /// Insert a saved comparison under the given short id, returning the row.
    pub async fn create(
        pool: &DbPool,
        id: &str,
        resort_ids_json: &str,
    ) -> Result<Comparison, sqlx::Error> {
        let query = format!(
            "INSERT INTO comparisons (id, resort_ids) VALUES (?, ?) \
             RETURNING {COMPARISON_COLUMNS}"
        );
        sqlx::query_as::<_, Comparison>(&query)
            .bind(id)
            .bind(resort_ids_json)
            .fetch_one(pool)
            .await
    }

    /// Find a saved comparison by its short id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Comparison>, sqlx::Error> {
        let query = format!("SELECT {COMPARISON_COLUMNS} FROM comparisons WHERE id = ?");
        sqlx::query_as::<_, Comparison>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
