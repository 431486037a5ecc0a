//! Resort listing, detail, price history, and budget handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use planner_core::budget::{self, StayPricing, Week};
use planner_core::deals::{self, PricePoint, PriceStats};
use planner_core::error::CoreError;
use planner_core::types::DbId;
use planner_db::models::comment::CommentWithMember;
use planner_db::models::hidden_costs::HiddenCosts;
use planner_db::models::price_history::PriceRecord;
use planner_db::models::resort::Resort;
use planner_db::repositories::{CommentRepo, HiddenCostRepo, PriceRepo, ResortRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// History window for the detail view.
const DETAIL_HISTORY_LIMIT: i64 = 30;
/// History window for the dedicated prices endpoint.
const PRICES_HISTORY_LIMIT: i64 = 90;

/// A resort with its computed deal badge and trend indicator.
#[derive(Debug, Serialize)]
pub struct ResortSummary {
    #[serde(flatten)]
    pub resort: Resort,
    pub badge: Option<String>,
    pub trend_indicator: String,
}

/// Full detail view: resort, cost profile, recent prices, and comments.
#[derive(Debug, Serialize)]
pub struct ResortDetail {
    #[serde(flatten)]
    pub resort: Resort,
    pub badge: Option<String>,
    pub trend_indicator: String,
    pub hidden_costs: Option<HiddenCosts>,
    pub price_history: Vec<PriceRecord>,
    pub comments: Vec<CommentWithMember>,
}

/// Price history plus derived statistics for one resort.
#[derive(Debug, Serialize)]
pub struct ResortPrices {
    pub resort_id: DbId,
    pub history: Vec<PriceRecord>,
    pub stats: Option<PriceStats>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetParams {
    pub nights: Option<i64>,
    pub week: Option<Week>,
}

/// Budget breakdown for a stay at one resort.
#[derive(Debug, Serialize)]
pub struct ResortBudget {
    pub resort_id: DbId,
    pub resort: String,
    #[serde(flatten)]
    pub breakdown: budget::Breakdown,
}

/// Derive price statistics for a resort from its cheapest daily prices.
async fn stats_for(
    pool: &planner_db::DbPool,
    resort_id: DbId,
) -> Result<Option<PriceStats>, sqlx::Error> {
    let daily = PriceRepo::daily_cheapest(pool, resort_id).await?;
    let points: Vec<PricePoint> = daily
        .iter()
        .map(|d| PricePoint {
            date: d.date,
            price: d.price,
        })
        .collect();
    Ok(PriceStats::from_history(&points))
}

fn summarize(resort: Resort, stats: Option<&PriceStats>) -> ResortSummary {
    let badge = deals::classify(resort.price_week1, resort.value_score, stats)
        .map(|badge| badge.label());
    let trend_indicator = deals::trend_indicator(stats);
    ResortSummary {
        resort,
        badge,
        trend_indicator,
    }
}

fn stay_pricing(resort: &Resort) -> StayPricing {
    StayPricing {
        price_week1: resort.price_week1,
        price_week2: resort.price_week2,
        is_villa: resort.is_villa,
    }
}

/// GET /resorts — all resorts, cheapest first, with badges and trends.
pub async fn list_resorts(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ResortSummary>>>> {
    let resorts = ResortRepo::list_all(&state.pool).await?;

    let mut summaries = Vec::with_capacity(resorts.len());
    for resort in resorts {
        let stats = stats_for(&state.pool, resort.id).await?;
        summaries.push(summarize(resort, stats.as_ref()));
    }

    Ok(Json(DataResponse { data: summaries }))
}

/// GET /resorts/{id} — one resort with costs, recent prices, and comments.
pub async fn resort_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ResortDetail>>> {
    let resort = ResortRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "resort",
            id,
        })?;

    let stats = stats_for(&state.pool, id).await?;
    let hidden_costs = HiddenCostRepo::find_by_resort(&state.pool, id).await?;
    let price_history = PriceRepo::history(&state.pool, id, DETAIL_HISTORY_LIMIT).await?;
    let comments = CommentRepo::list_for_resort(&state.pool, id).await?;

    let badge = deals::classify(resort.price_week1, resort.value_score, stats.as_ref())
        .map(|badge| badge.label());
    let trend_indicator = deals::trend_indicator(stats.as_ref());

    Ok(Json(DataResponse {
        data: ResortDetail {
            resort,
            badge,
            trend_indicator,
            hidden_costs,
            price_history,
            comments,
        },
    }))
}

/// GET /resorts/{id}/prices — price history with derived statistics.
pub async fn resort_prices(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ResortPrices>>> {
    if ResortRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "resort",
            id,
        }
        .into());
    }

    let history = PriceRepo::history(&state.pool, id, PRICES_HISTORY_LIMIT).await?;
    let stats = stats_for(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ResortPrices {
            resort_id: id,
            history,
            stats,
        },
    }))
}

/// GET /resorts/{id}/budget?nights=&week= — full trip cost breakdown.
pub async fn resort_budget(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<BudgetParams>,
) -> AppResult<Json<DataResponse<ResortBudget>>> {
    let nights = params.nights.unwrap_or(budget::DEFAULT_NIGHTS);
    budget::validate_nights(nights).map_err(CoreError::Validation)?;
    let week = params.week.unwrap_or_default();

    let resort = ResortRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "resort",
            id,
        })?;

    let costs = HiddenCostRepo::find_by_resort(&state.pool, id)
        .await?
        .map(|c| c.budget_input());

    let breakdown = budget::compute_budget(&stay_pricing(&resort), costs.as_ref(), nights, week);

    Ok(Json(DataResponse {
        data: ResortBudget {
            resort_id: resort.id,
            resort: resort.name,
            breakdown,
        },
    }))
}
