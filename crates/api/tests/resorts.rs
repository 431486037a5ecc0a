//! Endpoint tests for health, resort listing/detail, and budgets.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

use common::{get, test_app};

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn resorts_list_cheapest_first_with_badges(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/resorts").await;

    assert_eq!(status, StatusCode::OK);
    let resorts = body["data"].as_array().unwrap();
    assert_eq!(resorts.len(), 9);
    assert_eq!(resorts[0]["name"], "Hard Rock Hotel Cancun");

    // One seeded observation is not enough for stats, so badges fall back to
    // the static value score and no trend is shown.
    assert_eq!(resorts[0]["badge"], "Good Value");
    assert_eq!(resorts[0]["trend_indicator"], "");
    let hyatt = resorts.iter().find(|r| r["id"] == 1).unwrap();
    assert_eq!(hyatt["badge"], "Fair Price");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn resort_detail_includes_costs_history_and_comments(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/resorts/16").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["name"], "Hotel Xcaret Mexico");
    assert_eq!(data["hidden_costs"]["parks_included"], true);
    assert_eq!(data["price_history"].as_array().unwrap().len(), 1);
    assert_eq!(data["comments"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_resort_is_404(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/resorts/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn resort_prices_return_history_without_stats_for_one_point(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/resorts/1/prices").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["resort_id"], 1);
    assert_eq!(body["data"]["history"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["stats"], json!(null));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn default_budget_is_seven_nights_week_one(pool: SqlitePool) {
    let app = test_app(pool);

    // Hard Rock: 320/night x 7 rooms x 7 nights = 15680, plus 5330 flights,
    // 360 transfers, 2800 excursions, 15/night extras.
    let (status, body) = get(&app, "/api/v1/resorts/2/budget").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["resort"], "Hard Rock Hotel Cancun");
    assert_eq!(data["breakdown"]["accommodation"], 15_680);
    assert_eq!(data["total"], 24_275);
    assert_eq!(data["per_person"], 1_734);
    assert_eq!(data["budget_status"], "sweet");
    assert_eq!(data["budget_diff"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn villa_budget_prices_the_whole_property(pool: SqlitePool) {
    let app = test_app(pool);

    // Villa Quinta Clara, week 2: 1900/night x 5 nights, no room multiplier.
    let (status, body) = get(&app, "/api/v1/resorts/44/budget?nights=5&week=week2").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["breakdown"]["accommodation"], 9_500);
    assert_eq!(data["breakdown"]["extras"], 750);
    assert_eq!(data["total"], 18_740);
    assert_eq!(data["budget_status"], "under");
    assert_eq!(data["budget_diff"], 1_260);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn budget_rejects_non_positive_nights(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/resorts/2/budget?nights=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn family_roster_is_listed(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/family").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}
