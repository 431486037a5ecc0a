//! Price-scrape simulator.
//!
//! Generates one price observation per (resort, source) for a given date by
//! applying random jitter to static base prices, then persists them through
//! the idempotent price-history insert. The randomness source is injected so
//! tests can run the simulation deterministically.

pub mod sources;

use chrono::NaiveDate;
use rand::Rng;

use planner_db::models::price_history::CreatePriceRecord;
use planner_db::repositories::{AlertRepo, PriceRepo};
use planner_db::DbPool;

use sources::SOURCES;

/// Largest jitter applied to a base price, in whole dollars either way.
pub const MAX_VARIANCE: i64 = 15;
/// Jittered prices never fall below this fraction of the base.
pub const FLOOR_RATIO: f64 = 0.85;

/// Outcome of persisting one simulated scrape.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrapeSummary {
    pub inserted: u64,
    /// Rows skipped because an identical (resort, date, source) key existed.
    pub skipped: u64,
}

/// Apply random variance to a base price, floored at 85% of the base.
pub fn jitter(rng: &mut impl Rng, price: i64) -> i64 {
    let variance = rng.random_range(-MAX_VARIANCE..=MAX_VARIANCE);
    ((price + variance) as f64)
        .max(price as f64 * FLOOR_RATIO)
        .round() as i64
}

/// Simulate one scrape across all sources for the given date.
pub fn simulate_prices(rng: &mut impl Rng, date: NaiveDate) -> Vec<CreatePriceRecord> {
    let mut batch = Vec::new();
    for source in SOURCES {
        for &(resort_id, week1, week2) in source.prices {
            batch.push(CreatePriceRecord {
                resort_id,
                date,
                price_week1: jitter(rng, week1),
                price_week2: jitter(rng, week2),
                source: source.key.to_string(),
            });
        }
    }
    batch
}

/// Persist a simulated batch. Duplicate keys are counted as skipped, not
/// errors.
pub async fn persist(
    pool: &DbPool,
    batch: &[CreatePriceRecord],
) -> Result<ScrapeSummary, sqlx::Error> {
    let mut summary = ScrapeSummary::default();
    for record in batch {
        if PriceRepo::insert(pool, record).await? {
            summary.inserted += 1;
        } else {
            summary.skipped += 1;
        }
    }
    Ok(summary)
}

/// Run one full simulated scrape for `date` with thread-local randomness.
pub async fn run_once(pool: &DbPool, date: NaiveDate) -> Result<ScrapeSummary, sqlx::Error> {
    let batch = simulate_prices(&mut rand::rng(), date);
    let summary = persist(pool, &batch).await?;
    tracing::info!(
        date = %date,
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Scrape complete"
    );
    Ok(summary)
}

/// Log the day's best prices, price drops, and triggered alerts.
pub async fn log_report(pool: &DbPool, date: NaiveDate) -> Result<(), sqlx::Error> {
    for best in PriceRepo::best_for_date(pool, date).await? {
        tracing::info!(
            resort = %best.name,
            price = best.price_week1,
            source = %best.source,
            "Best price"
        );
    }

    let drops = PriceRepo::drops_for_date(pool, date).await?;
    if drops.is_empty() {
        tracing::info!("No significant price drops today");
    }
    for drop in drops {
        tracing::info!(
            resort = %drop.name,
            drop_percent = drop.drop_percent,
            prev = drop.prev_price,
            today = drop.today_price,
            "Price drop"
        );
    }

    // Alert delivery is out of scope; matches are only surfaced in the log.
    for alert in AlertRepo::triggered_for_date(pool, date).await? {
        tracing::info!(
            email = %alert.email,
            resort = %alert.resort_name,
            price = alert.price,
            threshold = alert.threshold,
            "Alert threshold met"
        );
    }

    Ok(())
}
