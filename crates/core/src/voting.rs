//! Ranked-choice vote tally.
//!
//! This is deliberately a plurality count over first choices: each option is
//! scored by how many ballots rank it first, with the full ranking detail
//! kept for display. Eliminated options' lower choices are never
//! redistributed — it is not instant-runoff and must stay that way.

use serde::{Deserialize, Serialize};

/// One ranked entry of a member's submission: an option value and its rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub value: String,
    pub rank: i64,
}

/// One stored ballot row, joined with the member's display name.
#[derive(Debug, Clone)]
pub struct BallotView {
    pub member: String,
    pub value: String,
    pub rank: i64,
}

/// How one member ranked an option, for display in results.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingDetail {
    pub member: String,
    pub rank: i64,
}

/// Tally result for one option.
#[derive(Debug, Clone, Serialize)]
pub struct OptionResult {
    pub value: String,
    pub first_choice_votes: i64,
    pub rankings: Vec<RankingDetail>,
}

/// Validate a ranked submission.
///
/// Ranks must be positive; duplicate ranks across options are accepted (a
/// member may rank two options equally). Uniqueness per (member, category,
/// option) is enforced by the store, not here.
pub fn validate_rankings(rankings: &[RankedEntry]) -> Result<(), String> {
    if rankings.is_empty() {
        return Err("rankings must not be empty".to_string());
    }
    for entry in rankings {
        if entry.value.trim().is_empty() {
            return Err("ranking value must not be empty".to_string());
        }
        if entry.rank < 1 {
            return Err(format!(
                "rank must be a positive integer, got {}",
                entry.rank
            ));
        }
    }
    Ok(())
}

/// Tally ballots for one category.
///
/// Options are sorted by first-choice count descending; the sort is stable,
/// and an option enters the tally at its first first-choice sighting, so
/// tied options keep the order in which they were first ranked first (a
/// lower-rank ballot seen earlier does not promote an option's position).
/// Options nobody ranked first are absent from the results. An empty ballot
/// set is a valid zero-result.
pub fn tally(ballots: &[BallotView]) -> Vec<OptionResult> {
    let mut results: Vec<OptionResult> = Vec::new();

    for ballot in ballots {
        if ballot.rank != 1 {
            continue;
        }
        match results.iter_mut().find(|r| r.value == ballot.value) {
            Some(result) => result.first_choice_votes += 1,
            None => results.push(OptionResult {
                value: ballot.value.clone(),
                first_choice_votes: 1,
                rankings: Vec::new(),
            }),
        }
    }

    for ballot in ballots {
        if let Some(result) = results.iter_mut().find(|r| r.value == ballot.value) {
            result.rankings.push(RankingDetail {
                member: ballot.member.clone(),
                rank: ballot.rank,
            });
        }
    }

    results.sort_by(|a, b| b.first_choice_votes.cmp(&a.first_choice_votes));
    results
}
