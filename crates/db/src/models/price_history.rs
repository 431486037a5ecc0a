use chrono::NaiveDate;
use planner_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `price_history` table: one observation per
/// (resort, date, source).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PriceRecord {
    pub id: DbId,
    pub resort_id: DbId,
    pub date: NaiveDate,
    pub price_week1: i64,
    pub price_week2: i64,
    pub source: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a price observation.
#[derive(Debug, Clone)]
pub struct CreatePriceRecord {
    pub resort_id: DbId,
    pub date: NaiveDate,
    pub price_week1: i64,
    pub price_week2: i64,
    pub source: String,
}

/// Cheapest week-1 price observed for a resort on one date.
#[derive(Debug, Clone, FromRow)]
pub struct DailyPrice {
    pub date: NaiveDate,
    pub price: i64,
}

/// Best (lowest) week-1 price for a resort on a given date, with its source.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BestPrice {
    pub resort_id: DbId,
    pub name: String,
    pub source: String,
    pub price_week1: i64,
    pub price_week2: i64,
}

/// A day-over-day price drop for one resort.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PriceDrop {
    pub name: String,
    pub today_price: i64,
    pub prev_price: i64,
    pub drop_percent: f64,
}
