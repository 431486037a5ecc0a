//! Side-by-side comparison handlers, including shareable saved comparisons.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::types::{DbId, Timestamp};
use planner_db::models::hidden_costs::HiddenCosts;
use planner_db::models::resort::Resort;
use planner_db::repositories::{ComparisonRepo, HiddenCostRepo, ResortRepo};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Length of the shareable short id.
const COMPARISON_ID_LEN: usize = 9;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    /// Comma-separated resort ids, e.g. `?ids=1,3,16`.
    pub ids: Option<String>,
}

/// One column of a side-by-side comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonItem {
    #[serde(flatten)]
    pub resort: Resort,
    pub hidden_costs: Option<HiddenCosts>,
}

#[derive(Debug, Deserialize)]
pub struct SaveComparisonRequest {
    pub resort_ids: Vec<DbId>,
}

/// Response for a freshly saved comparison.
#[derive(Debug, Serialize)]
pub struct SavedComparison {
    pub id: String,
    pub url: String,
}

/// A resolved saved comparison.
#[derive(Debug, Serialize)]
pub struct ResolvedComparison {
    pub id: String,
    pub resorts: Vec<ComparisonItem>,
    pub created_at: Timestamp,
}

/// Generate a short alphanumeric id for a shareable link.
fn short_id(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Parse a comma-separated id list. Blank segments are skipped; a list with
/// no ids at all is valid and yields an empty comparison.
fn parse_ids(raw: &str) -> Result<Vec<DbId>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse::<DbId>)
        .collect::<Result<Vec<DbId>, _>>()
        .map_err(|_| {
            AppError::BadRequest(format!(
                "ids must be a comma-separated list of integers, got {raw:?}"
            ))
        })
}

/// Pair each resort with its hidden-cost profile.
async fn load_items(
    pool: &planner_db::DbPool,
    ids: &[DbId],
) -> Result<Vec<ComparisonItem>, sqlx::Error> {
    let resorts = ResortRepo::find_by_ids(pool, ids).await?;
    let mut costs = HiddenCostRepo::find_by_resorts(pool, ids).await?;

    Ok(resorts
        .into_iter()
        .map(|resort| {
            let hidden_costs = costs
                .iter()
                .position(|c| c.resort_id == resort.id)
                .map(|pos| costs.swap_remove(pos));
            ComparisonItem {
                resort,
                hidden_costs,
            }
        })
        .collect())
}

/// GET /compare?ids=1,3,16 — resorts side by side. Unknown ids are skipped;
/// a missing or empty `ids` parameter yields an empty list, not an error.
pub async fn compare_resorts(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> AppResult<Json<DataResponse<Vec<ComparisonItem>>>> {
    let ids = match params.ids.as_deref() {
        Some(raw) => parse_ids(raw)?,
        None => Vec::new(),
    };

    let items = load_items(&state.pool, &ids).await?;

    Ok(Json(DataResponse { data: items }))
}

/// POST /compare — save a comparison under a short shareable id.
pub async fn save_comparison(
    State(state): State<AppState>,
    Json(input): Json<SaveComparisonRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SavedComparison>>)> {
    if input.resort_ids.is_empty() {
        return Err(AppError::BadRequest(
            "resort_ids must contain at least one resort id".into(),
        ));
    }

    let resort_ids_json = serde_json::to_string(&input.resort_ids)
        .map_err(|err| AppError::Internal(format!("Failed to encode resort ids: {err}")))?;

    // Collisions surface as a unique violation (409); at this id space and
    // volume a retry loop is not worth it.
    let id = short_id(COMPARISON_ID_LEN);
    let saved = ComparisonRepo::create(&state.pool, &id, &resort_ids_json).await?;

    tracing::info!(id = %saved.id, resorts = input.resort_ids.len(), "Comparison saved");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SavedComparison {
                url: format!("/compare/{}", saved.id),
                id: saved.id,
            },
        }),
    ))
}

/// GET /compare/{id} — resolve a saved comparison back into full resorts.
pub async fn saved_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ResolvedComparison>>> {
    let comparison = ComparisonRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("comparison {id}")))?;

    let ids: Vec<DbId> = serde_json::from_str(&comparison.resort_ids)
        .map_err(|err| AppError::Internal(format!("Stored comparison is corrupt: {err}")))?;

    let resorts = load_items(&state.pool, &ids).await?;

    Ok(Json(DataResponse {
        data: ResolvedComparison {
            id: comparison.id,
            resorts,
            created_at: comparison.created_at,
        },
    }))
}
