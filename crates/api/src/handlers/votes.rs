//! Voting handlers: single-vote upsert, atomic ranked submission, and the
//! first-choice tally.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::error::CoreError;
use planner_core::voting::{self, BallotView, OptionResult};
use planner_db::models::vote::{CreateVote, RankedSubmission, Vote, VoteWithMember};
use planner_db::repositories::VoteRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Category assumed when the results request does not name one.
const DEFAULT_CATEGORY: &str = "resort";

#[derive(Debug, Deserialize)]
pub struct VoteListParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsParams {
    pub category: Option<String>,
}

/// Tally for one category.
#[derive(Debug, Serialize)]
pub struct VoteResults {
    pub category: String,
    pub total_ballots: usize,
    pub results: Vec<OptionResult>,
}

/// GET /votes?category= — all votes with member names.
pub async fn list_votes(
    State(state): State<AppState>,
    Query(params): Query<VoteListParams>,
) -> AppResult<Json<DataResponse<Vec<VoteWithMember>>>> {
    let votes = VoteRepo::list(&state.pool, params.category.as_deref()).await?;
    Ok(Json(DataResponse { data: votes }))
}

/// POST /votes — upsert a single vote. Re-submitting the same option for the
/// same member and category replaces its rank.
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(input): Json<CreateVote>,
) -> AppResult<(StatusCode, Json<DataResponse<Vote>>)> {
    if input.category.trim().is_empty() {
        return Err(CoreError::Validation("category must not be empty".into()).into());
    }
    if input.value.trim().is_empty() {
        return Err(CoreError::Validation("value must not be empty".into()).into());
    }
    let rank = input.rank.unwrap_or(1);
    if rank < 1 {
        return Err(
            CoreError::Validation(format!("rank must be a positive integer, got {rank}")).into(),
        );
    }

    let vote = VoteRepo::upsert(&state.pool, input.member_id, &input.category, &input.value, rank)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: vote })))
}

/// POST /votes/ranked — replace a member's ballots for a category with a
/// full ranked submission, atomically.
pub async fn submit_ranked(
    State(state): State<AppState>,
    Json(input): Json<RankedSubmission>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Vote>>>)> {
    if input.category.trim().is_empty() {
        return Err(CoreError::Validation("category must not be empty".into()).into());
    }
    voting::validate_rankings(&input.rankings).map_err(CoreError::Validation)?;

    let votes =
        VoteRepo::replace_ballots(&state.pool, input.member_id, &input.category, &input.rankings)
            .await?;

    tracing::info!(
        member_id = input.member_id,
        category = %input.category,
        rankings = votes.len(),
        "Ranked ballot submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: votes })))
}

/// GET /votes/results?category= — first-choice tally for a category.
pub async fn vote_results(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> AppResult<Json<DataResponse<VoteResults>>> {
    let category = params
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let rows = VoteRepo::list_by_category(&state.pool, &category).await?;
    let total_ballots = rows.len();
    let ballots: Vec<BallotView> = rows
        .into_iter()
        .map(|row| BallotView {
            member: row.member_name,
            value: row.value,
            rank: row.rank,
        })
        .collect();

    let results = voting::tally(&ballots);

    Ok(Json(DataResponse {
        data: VoteResults {
            category,
            total_ballots,
            results,
        },
    }))
}
