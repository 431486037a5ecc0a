use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use planner_core::error::CoreError;
use planner_core::validation;
use planner_db::models::comment::{Comment, CreateComment};
use planner_db::repositories::{CommentRepo, ResortRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /comments — add a comment to a resort. Anonymous comments (no
/// member) are allowed.
pub async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    validation::validate_comment_content(&input.content).map_err(CoreError::Validation)?;

    if ResortRepo::find_by_id(&state.pool, input.resort_id)
        .await?
        .is_none()
    {
        return Err(CoreError::NotFound {
            entity: "resort",
            id: input.resort_id,
        }
        .into());
    }

    let comment = CommentRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
