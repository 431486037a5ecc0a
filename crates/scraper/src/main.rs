//! One-shot scrape runner: simulates a price check across all sources and
//! logs the resulting report.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planner_scraper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://vacation.db".into());

    let pool = planner_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    planner_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let today = chrono::Utc::now().date_naive();
    tracing::info!(date = %today, "Starting price scrape");

    planner_scraper::run_once(&pool, today)
        .await
        .expect("Scrape failed");

    planner_scraper::log_report(&pool, today)
        .await
        .expect("Failed to build scrape report");
}
