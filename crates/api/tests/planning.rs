//! Endpoint tests for comments, alerts, comparisons, and the itinerary.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

use common::{delete, get, post_json, test_app};

#[sqlx::test(migrations = "../db/migrations")]
async fn comment_shows_up_in_resort_detail(pool: SqlitePool) {
    let app = test_app(pool);

    let comment = json!({
        "resort_id": 3,
        "member_id": 7,
        "content": "The swim-up rooms look amazing"
    });
    let (status, body) = post_json(&app, "/api/v1/comments", comment).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["resort_id"], 3);

    let (_, body) = get(&app, "/api/v1/resorts/3").await;
    let comments = body["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["member_name"], "Dann");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn comment_on_unknown_resort_is_404(pool: SqlitePool) {
    let app = test_app(pool);

    let comment = json!({ "resort_id": 999, "content": "hello" });
    let (status, body) = post_json(&app, "/api/v1/comments", comment).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_comment_is_rejected(pool: SqlitePool) {
    let app = test_app(pool);

    let comment = json!({ "resort_id": 3, "content": "   " });
    let (status, body) = post_json(&app, "/api/v1/comments", comment).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn alert_signup_validates_email_and_threshold(pool: SqlitePool) {
    let app = test_app(pool);

    let bad_email = json!({ "email": "not-an-email", "threshold": 350 });
    let (status, _) = post_json(&app, "/api/v1/alerts", bad_email).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bad_threshold = json!({ "email": "dann@example.com", "threshold": 0 });
    let (status, _) = post_json(&app, "/api/v1/alerts", bad_threshold).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let alert = json!({ "email": "dann@example.com", "resort_id": 2, "threshold": 350 });
    let (status, body) = post_json(&app, "/api/v1/alerts", alert).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn compare_without_ids_is_an_empty_list(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/compare").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (status, body) = get(&app, "/api/v1/compare?ids=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (status, body) = get(&app, "/api/v1/compare?ids=1,abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn compare_skips_unknown_ids(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = get(&app, "/api/v1/compare?ids=1,16,999").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let xcaret = items.iter().find(|i| i["id"] == 16).unwrap();
    assert_eq!(xcaret["hidden_costs"]["free_transfer"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn saved_comparison_round_trips_through_its_short_id(pool: SqlitePool) {
    let app = test_app(pool);

    let (status, body) = post_json(&app, "/api/v1/compare", json!({ "resort_ids": [1, 3] })).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 9);
    assert_eq!(body["data"]["url"], format!("/compare/{id}"));

    let (status, body) = get(&app, &format!("/api/v1/compare/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["resorts"].as_array().unwrap().len(), 2);

    let (status, _) = get(&app, "/api/v1/compare/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn itinerary_entries_can_be_added_and_removed(pool: SqlitePool) {
    let app = test_app(pool);

    let entry = json!({
        "date": "2026-05-24",
        "time_slot": "morning",
        "title": "Xcaret park day",
        "category": "excursion",
        "cost": 1200
    });
    let (status, body) = post_json(&app, "/api/v1/itinerary", entry).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["booked"], false);

    let (_, body) = get(&app, "/api/v1/itinerary").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = delete(&app, &format!("/api/v1/itinerary/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = delete(&app, &format!("/api/v1/itinerary/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn itinerary_title_is_required(pool: SqlitePool) {
    let app = test_app(pool);

    let entry = json!({ "date": "2026-05-24", "title": "  " });
    let (status, body) = post_json(&app, "/api/v1/itinerary", entry).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
