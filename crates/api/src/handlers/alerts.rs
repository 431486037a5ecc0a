use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use planner_core::error::CoreError;
use planner_core::validation;
use planner_db::models::price_alert::{CreatePriceAlert, PriceAlert};
use planner_db::repositories::{AlertRepo, ResortRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /alerts — sign up for a price alert. Omitting `resort_id` watches
/// every resort.
pub async fn create_alert(
    State(state): State<AppState>,
    Json(input): Json<CreatePriceAlert>,
) -> AppResult<(StatusCode, Json<DataResponse<PriceAlert>>)> {
    validation::validate_alert_email(&input.email).map_err(CoreError::Validation)?;
    validation::validate_alert_threshold(input.threshold).map_err(CoreError::Validation)?;

    if let Some(resort_id) = input.resort_id {
        if ResortRepo::find_by_id(&state.pool, resort_id)
            .await?
            .is_none()
        {
            return Err(CoreError::NotFound {
                entity: "resort",
                id: resort_id,
            }
            .into());
        }
    }

    let alert = AlertRepo::create(&state.pool, &input).await?;

    tracing::info!(alert_id = alert.id, threshold = alert.threshold, "Price alert created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: alert })))
}
