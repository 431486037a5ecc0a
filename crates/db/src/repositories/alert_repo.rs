//! Repository for the `price_alerts` table.

use chrono::NaiveDate;

use crate::models::price_alert::{CreatePriceAlert, PriceAlert, TriggeredAlert};
use crate::DbPool;

/// Column list for price_alerts queries.
const ALERT_COLUMNS: &str = "id, email, resort_id, threshold, active, created_at";

/// Provides alert signups and threshold matching.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert an alert signup, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreatePriceAlert,
    ) -> Result<PriceAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO price_alerts (email, resort_id, threshold) \
             VALUES (?, ?, ?) \
             RETURNING {ALERT_COLUMNS}"
        );
        sqlx::query_as::<_, PriceAlert>(&query)
            .bind(&input.email)
            .bind(input.resort_id)
            .bind(input.threshold)
            .fetch_one(pool)
            .await
    }

    /// Active alerts whose threshold the given date's cheapest price met or
    /// beat. An alert with no resort is matched against every resort's
    /// observations and reports the one that offered the cheapest price.
    /// No delivery happens here; callers log or display the matches.
    pub async fn triggered_for_date(
        pool: &DbPool,
        date: NaiveDate,
    ) -> Result<Vec<TriggeredAlert>, sqlx::Error> {
        sqlx::query_as::<_, TriggeredAlert>(
            "SELECT pa.email, pa.threshold, r.name AS resort_name, \
                    MIN(ph.price_week1) AS price \
             FROM price_alerts pa \
             JOIN price_history ph ON ph.date = ? \
                  AND (pa.resort_id IS NULL OR ph.resort_id = pa.resort_id) \
             JOIN resorts r ON r.id = ph.resort_id \
             WHERE pa.active = 1 \
             GROUP BY pa.id \
             HAVING MIN(ph.price_week1) <= pa.threshold",
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }
}
