use axum::extract::State;
use axum::Json;
use planner_db::models::family_member::FamilyMember;
use planner_db::repositories::FamilyRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /family — everyone on the trip, grouped then alphabetical.
pub async fn list_members(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FamilyMember>>>> {
    let members = FamilyRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}
