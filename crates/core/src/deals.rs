//! Deal classification and price-trend display logic.
//!
//! A resort's badge is derived from its current nightly price (the earlier
//! reference week) and aggregated price-history statistics. Classification
//! rules live in an ordered list evaluated first-match-wins: a hot deal
//! beats a drop badge, and a drop beats plain good value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Percent change at or below which a downward trend earns a drop badge.
pub const DROP_BADGE_PERCENT: f64 = -5.0;
/// Multiplier over the average price above which a resort is "Premium".
pub const PREMIUM_MULTIPLIER: f64 = 1.1;
/// Percent band within which a trend counts as stable.
pub const STABLE_BAND_PERCENT: f64 = 1.0;
/// Static value score at or above which a resort without stats is "Good Value".
pub const GOOD_VALUE_SCORE: i64 = 9;
/// Static value score at or above which a resort without stats is "Fair Price".
pub const FAIR_PRICE_SCORE: i64 = 7;

// ---------------------------------------------------------------------------
// Trend and stats
// ---------------------------------------------------------------------------

/// Direction of a resort's price trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Down,
    Up,
    Stable,
}

/// One observed nightly price for a resort on a calendar date.
///
/// Callers supply the cheapest observation per day, in ascending date order.
#[derive(Debug, Clone, Copy)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: i64,
}

/// Aggregated price statistics for one resort.
#[derive(Debug, Clone, Serialize)]
pub struct PriceStats {
    pub trend: Trend,
    /// Signed percent change from the earliest to the latest observation.
    pub percent_change: f64,
    pub lowest_seen: i64,
    pub avg_price: f64,
    /// Prices at or below this are classified as a hot deal.
    pub deal_threshold: i64,
}

impl PriceStats {
    /// Derive stats from a resort's price history.
    ///
    /// Returns `None` with fewer than two observations: a single data point
    /// carries no trend and would mark every freshly seeded resort a hot
    /// deal.
    ///
    /// The deal threshold sits a quarter of the way from the lowest seen
    /// price up to the average, keeping it strictly below the average
    /// whenever prices vary at all.
    pub fn from_history(points: &[PricePoint]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let first = points.first()?.price;
        let last = points.last()?.price;
        let lowest_seen = points.iter().map(|p| p.price).min()?;
        let avg_price =
            points.iter().map(|p| p.price as f64).sum::<f64>() / points.len() as f64;

        let percent_change = if first > 0 {
            (last - first) as f64 / first as f64 * 100.0
        } else {
            0.0
        };

        let trend = if percent_change < -STABLE_BAND_PERCENT {
            Trend::Down
        } else if percent_change > STABLE_BAND_PERCENT {
            Trend::Up
        } else {
            Trend::Stable
        };

        let deal_threshold =
            (lowest_seen as f64 + (avg_price - lowest_seen as f64) / 4.0).round() as i64;

        Some(PriceStats {
            trend,
            percent_change,
            lowest_seen,
            avg_price,
            deal_threshold,
        })
    }
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// Deal badge attached to a resort listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Badge {
    HotDeal,
    /// Carries the signed percent change; displayed as a rounded absolute value.
    PriceDrop(f64),
    GoodValue,
    FairPrice,
    Premium,
}

impl Badge {
    /// Display label. Drop percentages round to the nearest whole percent
    /// (halves away from zero) and use the absolute value even though the
    /// stored change is negative.
    pub fn label(&self) -> String {
        match self {
            Badge::HotDeal => "Hot Deal".to_string(),
            Badge::PriceDrop(pct) => format!("{}% Drop", pct.abs().round() as i64),
            Badge::GoodValue => "Good Value".to_string(),
            Badge::FairPrice => "Fair Price".to_string(),
            Badge::Premium => "Premium".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification rules
// ---------------------------------------------------------------------------

type Predicate = fn(i64, &PriceStats) -> bool;
type Producer = fn(i64, &PriceStats) -> Badge;

/// Ordered classification rules, evaluated first-match-wins.
pub const RULES: &[(Predicate, Producer)] = &[
    (at_or_below_deal_threshold, hot_deal),
    (falling_sharply, price_drop),
    (below_average, good_value),
    (well_above_average, premium),
];

fn at_or_below_deal_threshold(price: i64, stats: &PriceStats) -> bool {
    price <= stats.deal_threshold
}

fn hot_deal(_price: i64, _stats: &PriceStats) -> Badge {
    Badge::HotDeal
}

fn falling_sharply(_price: i64, stats: &PriceStats) -> bool {
    stats.trend == Trend::Down && stats.percent_change <= DROP_BADGE_PERCENT
}

fn price_drop(_price: i64, stats: &PriceStats) -> Badge {
    Badge::PriceDrop(stats.percent_change)
}

fn below_average(price: i64, stats: &PriceStats) -> bool {
    (price as f64) < stats.avg_price
}

fn good_value(_price: i64, _stats: &PriceStats) -> Badge {
    Badge::GoodValue
}

fn well_above_average(price: i64, stats: &PriceStats) -> bool {
    price as f64 > stats.avg_price * PREMIUM_MULTIPLIER
}

fn premium(_price: i64, _stats: &PriceStats) -> Badge {
    Badge::Premium
}

/// Classify a resort's current price into a deal badge.
///
/// Without stats, falls back to the resort's static value score; with stats,
/// walks [`RULES`] in order and returns the first match.
pub fn classify(
    current_price: i64,
    value_score: Option<i64>,
    stats: Option<&PriceStats>,
) -> Option<Badge> {
    let Some(stats) = stats else {
        return match value_score {
            Some(score) if score >= GOOD_VALUE_SCORE => Some(Badge::GoodValue),
            Some(score) if score >= FAIR_PRICE_SCORE => Some(Badge::FairPrice),
            _ => None,
        };
    };

    RULES
        .iter()
        .find(|(matches, _)| matches(current_price, stats))
        .map(|(_, badge)| badge(current_price, stats))
}

/// Display string for a resort's price trend.
///
/// Empty string means "no indicator" (stats absent), not an error.
pub fn trend_indicator(stats: Option<&PriceStats>) -> String {
    let Some(stats) = stats else {
        return String::new();
    };
    let (arrow, label) = match stats.trend {
        Trend::Down => ("↓", "prices falling"),
        Trend::Up => ("↑", "prices rising"),
        Trend::Stable => ("→", "stable"),
    };
    format!("{arrow} {:.1}% {label}", stats.percent_change.abs())
}
