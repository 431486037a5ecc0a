//! Repository for the `price_history` table and its aggregations.

use chrono::NaiveDate;
use planner_core::types::DbId;

use crate::models::price_history::{
    BestPrice, CreatePriceRecord, DailyPrice, PriceDrop, PriceRecord,
};
use crate::DbPool;

/// Column list for price_history queries.
const PRICE_COLUMNS: &str =
    "id, resort_id, date, price_week1, price_week2, source, created_at";

/// Provides inserts and aggregations over price observations.
pub struct PriceRepo;

impl PriceRepo {
    /// Insert a price observation; a duplicate (resort, date, source) key is
    /// silently ignored. Returns whether a row was actually inserted.
    pub async fn insert(pool: &DbPool, record: &CreatePriceRecord) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO price_history \
                (resort_id, date, price_week1, price_week2, source) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.resort_id)
        .bind(record.date)
        .bind(record.price_week1)
        .bind(record.price_week2)
        .bind(&record.source)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Recent observations for a resort, newest first.
    pub async fn history(
        pool: &DbPool,
        resort_id: DbId,
        limit: i64,
    ) -> Result<Vec<PriceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {PRICE_COLUMNS} FROM price_history \
             WHERE resort_id = ? ORDER BY date DESC, source LIMIT ?"
        );
        sqlx::query_as::<_, PriceRecord>(&query)
            .bind(resort_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Cheapest week-1 price per date for a resort, in ascending date order.
    ///
    /// This is the series the stats derivation consumes.
    pub async fn daily_cheapest(
        pool: &DbPool,
        resort_id: DbId,
    ) -> Result<Vec<DailyPrice>, sqlx::Error> {
        sqlx::query_as::<_, DailyPrice>(
            "SELECT date, MIN(price_week1) AS price FROM price_history \
             WHERE resort_id = ? GROUP BY date ORDER BY date ASC",
        )
        .bind(resort_id)
        .fetch_all(pool)
        .await
    }

    /// Lowest week-1 price per resort for one date, with the source that
    /// offered it.
    pub async fn best_for_date(
        pool: &DbPool,
        date: NaiveDate,
    ) -> Result<Vec<BestPrice>, sqlx::Error> {
        sqlx::query_as::<_, BestPrice>(
            "SELECT p.resort_id, r.name, p.source, \
                    MIN(p.price_week1) AS price_week1, p.price_week2 \
             FROM price_history p \
             JOIN resorts r ON r.id = p.resort_id \
             WHERE p.date = ? \
             GROUP BY p.resort_id \
             ORDER BY r.name",
        )
        .bind(date)
        .fetch_all(pool)
        .await
    }

    /// Resorts whose cheapest price dropped versus the previous day,
    /// steepest drop first.
    pub async fn drops_for_date(
        pool: &DbPool,
        date: NaiveDate,
    ) -> Result<Vec<PriceDrop>, sqlx::Error> {
        sqlx::query_as::<_, PriceDrop>(
            "WITH today AS ( \
                 SELECT resort_id, MIN(price_week1) AS price \
                 FROM price_history WHERE date = ? GROUP BY resort_id \
             ), prev AS ( \
                 SELECT resort_id, MIN(price_week1) AS price \
                 FROM price_history WHERE date = date(?, '-1 day') GROUP BY resort_id \
             ) \
             SELECT r.name, today.price AS today_price, prev.price AS prev_price, \
                    ROUND((prev.price - today.price) * 100.0 / prev.price, 1) AS drop_percent \
             FROM today \
             JOIN prev ON prev.resort_id = today.resort_id \
             JOIN resorts r ON r.id = today.resort_id \
             WHERE today.price < prev.price \
             ORDER BY drop_percent DESC",
        )
        .bind(date)
        .bind(date)
        .fetch_all(pool)
        .await
    }
}
