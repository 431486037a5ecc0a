//! Repository integration tests against a migrated in-memory database.

use chrono::{Duration, Utc};
use planner_core::deals::{PricePoint, PriceStats};
use planner_core::voting::RankedEntry;
use planner_db::models::comment::CreateComment;
use planner_db::models::itinerary::CreateItineraryEntry;
use planner_db::models::price_alert::CreatePriceAlert;
use planner_db::models::price_history::CreatePriceRecord;
use planner_db::repositories::{
    AlertRepo, CommentRepo, ComparisonRepo, FamilyRepo, ItineraryRepo, PriceRepo, ResortRepo,
    VoteRepo,
};
use sqlx::SqlitePool;

fn price_record(resort_id: i64, date: chrono::NaiveDate, price: i64, source: &str) -> CreatePriceRecord {
    CreatePriceRecord {
        resort_id,
        date,
        price_week1: price,
        price_week2: price + 40,
        source: source.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn seeded_resorts_are_listed_cheapest_first(pool: SqlitePool) {
    let resorts = ResortRepo::list_all(&pool).await.unwrap();

    assert_eq!(resorts.len(), 9);
    assert_eq!(resorts[0].name, "Hard Rock Hotel Cancun");
    assert!(resorts
        .windows(2)
        .all(|pair| pair[0].price_week1 <= pair[1].price_week1));
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_ids_skips_unknown_ids(pool: SqlitePool) {
    let resorts = ResortRepo::find_by_ids(&pool, &[1, 3, 9999]).await.unwrap();

    // Cheapest first: Moon Palace (350) before Hyatt Ziva (380).
    let ids: Vec<i64> = resorts.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_price_observation_is_ignored(pool: SqlitePool) {
    let today = Utc::now().date_naive();
    let record = price_record(1, today, 375, "costco");

    assert!(PriceRepo::insert(&pool, &record).await.unwrap());
    assert!(!PriceRepo::insert(&pool, &record).await.unwrap());

    // Seed row plus the one successful insert.
    let history = PriceRepo::history(&pool, 1, 50).await.unwrap();
    assert_eq!(history.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn daily_cheapest_takes_the_minimum_across_sources(pool: SqlitePool) {
    let today = Utc::now().date_naive();
    let tomorrow = today + Duration::days(1);

    PriceRepo::insert(&pool, &price_record(1, tomorrow, 400, "expedia"))
        .await
        .unwrap();
    PriceRepo::insert(&pool, &price_record(1, tomorrow, 360, "booking"))
        .await
        .unwrap();

    let daily = PriceRepo::daily_cheapest(&pool, 1).await.unwrap();

    assert_eq!(daily.len(), 2);
    assert!(daily[0].date < daily[1].date);
    assert_eq!(daily[1].price, 360);
}

#[sqlx::test(migrations = "./migrations")]
async fn derived_stats_keep_threshold_below_average(pool: SqlitePool) {
    let today = Utc::now().date_naive();
    for (offset, price) in [(1, 360), (2, 410), (3, 330)] {
        PriceRepo::insert(
            &pool,
            &price_record(1, today + Duration::days(offset), price, "costco"),
        )
        .await
        .unwrap();
    }

    let daily = PriceRepo::daily_cheapest(&pool, 1).await.unwrap();
    let points: Vec<PricePoint> = daily
        .iter()
        .map(|d| PricePoint {
            date: d.date,
            price: d.price,
        })
        .collect();

    let stats = PriceStats::from_history(&points).unwrap();
    assert_eq!(stats.lowest_seen, 330);
    assert!((stats.deal_threshold as f64) < stats.avg_price);
}

#[sqlx::test(migrations = "./migrations")]
async fn vote_upsert_replaces_rank_instead_of_duplicating(pool: SqlitePool) {
    VoteRepo::upsert(&pool, 1, "resort", "Hyatt Ziva Cancun", 1)
        .await
        .unwrap();
    let updated = VoteRepo::upsert(&pool, 1, "resort", "Hyatt Ziva Cancun", 3)
        .await
        .unwrap();

    assert_eq!(updated.rank, 3);

    let votes = VoteRepo::list(&pool, Some("resort")).await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].rank, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn ranked_replacement_leaves_only_the_new_ballots(pool: SqlitePool) {
    let first = vec![
        RankedEntry {
            value: "Hyatt Ziva Cancun".into(),
            rank: 1,
        },
        RankedEntry {
            value: "Moon Palace Cancun".into(),
            rank: 2,
        },
    ];
    VoteRepo::replace_ballots(&pool, 1, "resort", &first)
        .await
        .unwrap();

    let second = vec![
        RankedEntry {
            value: "Hotel Xcaret Mexico".into(),
            rank: 1,
        },
        RankedEntry {
            value: "Hyatt Ziva Cancun".into(),
            rank: 2,
        },
        RankedEntry {
            value: "Moon Palace Cancun".into(),
            rank: 3,
        },
    ];
    let inserted = VoteRepo::replace_ballots(&pool, 1, "resort", &second)
        .await
        .unwrap();
    assert_eq!(inserted.len(), 3);

    let votes = VoteRepo::list_by_category(&pool, "resort").await.unwrap();
    assert_eq!(votes.len(), 3);
    assert_eq!(votes[0].value, "Hotel Xcaret Mexico");
    assert!(votes.iter().all(|v| v.member_id == 1));
}

#[sqlx::test(migrations = "./migrations")]
async fn comments_list_newest_first_with_member_names(pool: SqlitePool) {
    CommentRepo::create(
        &pool,
        &CreateComment {
            resort_id: 1,
            member_id: Some(7),
            content: "Dann says the pool is great".into(),
        },
    )
    .await
    .unwrap();
    CommentRepo::create(
        &pool,
        &CreateComment {
            resort_id: 1,
            member_id: None,
            content: "anonymous take".into(),
        },
    )
    .await
    .unwrap();

    let comments = CommentRepo::list_for_resort(&pool, 1).await.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "anonymous take");
    assert_eq!(comments[0].member_name, None);
    assert_eq!(comments[1].member_name.as_deref(), Some("Dann"));
}

#[sqlx::test(migrations = "./migrations")]
async fn saved_comparisons_round_trip(pool: SqlitePool) {
    let created = ComparisonRepo::create(&pool, "abc123xyz", "[1,3,16]")
        .await
        .unwrap();
    assert_eq!(created.id, "abc123xyz");

    let found = ComparisonRepo::find_by_id(&pool, "abc123xyz")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.resort_ids, "[1,3,16]");

    assert!(ComparisonRepo::find_by_id(&pool, "missing")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn itinerary_create_list_delete(pool: SqlitePool) {
    let entry = ItineraryRepo::create(
        &pool,
        &CreateItineraryEntry {
            date: Utc::now().date_naive(),
            time_slot: Some("morning".into()),
            title: "Xcaret park day".into(),
            description: None,
            category: Some("excursion".into()),
            cost: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(entry.cost, 0);

    let entries = ItineraryRepo::list_all(&pool).await.unwrap();
    assert_eq!(entries.len(), 1);

    assert!(ItineraryRepo::delete(&pool, entry.id).await.unwrap());
    assert!(!ItineraryRepo::delete(&pool, entry.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn alerts_trigger_on_the_day_price_meets_threshold(pool: SqlitePool) {
    AlertRepo::create(
        &pool,
        &CreatePriceAlert {
            email: "dann@example.com".into(),
            resort_id: Some(2),
            threshold: 330,
        },
    )
    .await
    .unwrap();

    // Seeded price for resort 2 today is 320, which beats the threshold.
    let triggered = AlertRepo::triggered_for_date(&pool, Utc::now().date_naive())
        .await
        .unwrap();

    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].email, "dann@example.com");
    assert_eq!(triggered[0].price, 320);
}

#[sqlx::test(migrations = "./migrations")]
async fn alert_without_a_resort_watches_every_resort(pool: SqlitePool) {
    AlertRepo::create(
        &pool,
        &CreatePriceAlert {
            email: "alex@example.com".into(),
            resort_id: None,
            threshold: 330,
        },
    )
    .await
    .unwrap();
    AlertRepo::create(
        &pool,
        &CreatePriceAlert {
            email: "never@example.com".into(),
            resort_id: None,
            threshold: 100,
        },
    )
    .await
    .unwrap();

    let triggered = AlertRepo::triggered_for_date(&pool, Utc::now().date_naive())
        .await
        .unwrap();

    // The seeded cheapest price anywhere today is Hard Rock at 320.
    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].email, "alex@example.com");
    assert_eq!(triggered[0].resort_name, "Hard Rock Hotel Cancun");
    assert_eq!(triggered[0].price, 320);
}

#[sqlx::test(migrations = "./migrations")]
async fn family_roster_is_seeded(pool: SqlitePool) {
    let members = FamilyRepo::list_all(&pool).await.unwrap();

    assert_eq!(members.len(), 10);
    assert!(members.iter().any(|m| m.name == "Dann's Husband"));
}
