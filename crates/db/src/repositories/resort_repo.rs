//! Repositories for the `resorts` and `hidden_costs` tables.

use planner_core::types::DbId;

use crate::models::hidden_costs::HiddenCosts;
use crate::models::resort::Resort;
use crate::DbPool;

/// Column list for resorts queries.
const RESORT_COLUMNS: &str = "id, name, area, area_name, price_week1, price_week2, \
    rating, reviews, family, accessible, luxury, adults_only, is_villa, bedrooms, \
    sleeps, value_score, created_at, updated_at";

/// Column list for hidden_costs queries.
const COST_COLUMNS: &str = "resort_id, resort_fee, tips, transfer, extras, \
    free_transfer, resort_credits, parks_included, parks_value";

/// Read operations for resorts (rows are seeded, not created via the API).
pub struct ResortRepo;

impl ResortRepo {
    /// List every resort, cheapest week-1 price first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Resort>, sqlx::Error> {
        let query = format!("SELECT {RESORT_COLUMNS} FROM resorts ORDER BY price_week1");
        sqlx::query_as::<_, Resort>(&query).fetch_all(pool).await
    }

    /// Find a resort by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Resort>, sqlx::Error> {
        let query = format!("SELECT {RESORT_COLUMNS} FROM resorts WHERE id = ?");
        sqlx::query_as::<_, Resort>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the given resorts, cheapest first. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &DbPool, ids: &[DbId]) -> Result<Vec<Resort>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT {RESORT_COLUMNS} FROM resorts WHERE id IN ({placeholders}) \
             ORDER BY price_week1"
        );
        let mut q = sqlx::query_as::<_, Resort>(&query);
        for id in ids {
            q = q.bind(id);
        }
        q.fetch_all(pool).await
    }
}

/// Read operations for hidden-cost profiles.
pub struct HiddenCostRepo;

impl HiddenCostRepo {
    /// Find the hidden-cost profile for a resort.
    pub async fn find_by_resort(
        pool: &DbPool,
        resort_id: DbId,
    ) -> Result<Option<HiddenCosts>, sqlx::Error> {
        let query = format!("SELECT {COST_COLUMNS} FROM hidden_costs WHERE resort_id = ?");
        sqlx::query_as::<_, HiddenCosts>(&query)
            .bind(resort_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch profiles for the given resorts.
    pub async fn find_by_resorts(
        pool: &DbPool,
        resort_ids: &[DbId],
    ) -> Result<Vec<HiddenCosts>, sqlx::Error> {
        if resort_ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; resort_ids.len()].join(", ");
        let query = format!(
            "SELECT {COST_COLUMNS} FROM hidden_costs WHERE resort_id IN ({placeholders})"
        );
        let mut q = sqlx::query_as::<_, HiddenCosts>(&query);
        for id in resort_ids {
            q = q.bind(id);
        }
        q.fetch_all(pool).await
    }
}
