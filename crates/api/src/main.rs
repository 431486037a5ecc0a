use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use planner_api::background;
use planner_api::config::ServerConfig;
use planner_api::router::build_app_router;
use planner_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "planner_api=info,planner_scraper=info,tower_http=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://vacation.db".into());

    let pool = planner_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    planner_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database connection established");

    planner_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations applied");

    let cancel = CancellationToken::new();
    let scrape_handle = tokio::spawn(background::price_scrape::run(
        pool.clone(),
        config.scrape_interval_secs,
        cancel.clone(),
    ));

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind {addr}: {err}"));
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel))
        .await
        .expect("Server error");

    // Let the scrape loop observe cancellation before exit.
    let _ = scrape_handle.await;
    tracing::info!("Shutdown complete");
}

async fn shutdown_signal(cancel: CancellationToken) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
    cancel.cancel();
}
