//! Periodic simulated price scrape.
//!
//! Runs once at startup and then on a fixed interval, inserting the day's
//! simulated observations and logging a summary report. Shuts down cleanly
//! when the cancellation token fires.

use std::time::Duration;

use planner_db::DbPool;
use tokio_util::sync::CancellationToken;

/// Run the scrape loop until cancelled.
pub async fn run(pool: DbPool, interval_secs: u64, cancel: CancellationToken) {
    tracing::info!(interval_secs, "Price scrape task started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Price scrape task stopping");
                break;
            }
            _ = interval.tick() => {
                scrape_once(&pool).await;
            }
        }
    }
}

async fn scrape_once(pool: &DbPool) {
    let today = chrono::Utc::now().date_naive();

    match planner_scraper::run_once(pool, today).await {
        Ok(summary) => {
            tracing::info!(
                date = %today,
                inserted = summary.inserted,
                skipped = summary.skipped,
                "Price scrape complete"
            );
            if let Err(err) = planner_scraper::log_report(pool, today).await {
                tracing::error!(error = %err, "Price report failed");
            }
        }
        Err(err) => {
            tracing::error!(error = %err, date = %today, "Price scrape failed");
        }
    }
}
