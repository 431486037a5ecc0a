use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::error::CoreError;
use planner_core::types::DbId;
use planner_core::validation;
use planner_db::models::itinerary::{CreateItineraryEntry, ItineraryEntry};
use planner_db::repositories::ItineraryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /itinerary — all entries in trip order.
pub async fn list_entries(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ItineraryEntry>>>> {
    let entries = ItineraryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /itinerary — add an entry.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(input): Json<CreateItineraryEntry>,
) -> AppResult<(StatusCode, Json<DataResponse<ItineraryEntry>>)> {
    validation::validate_itinerary_title(&input.title).map_err(CoreError::Validation)?;
    if let Some(cost) = input.cost {
        validation::validate_itinerary_cost(cost).map_err(CoreError::Validation)?;
    }

    let entry = ItineraryRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// DELETE /itinerary/{id} — remove an entry.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ItineraryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "itinerary entry",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
