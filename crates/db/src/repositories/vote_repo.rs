//! Repository for the `votes` table.

use planner_core::types::DbId;
use planner_core::voting::RankedEntry;

use crate::models::vote::{Vote, VoteWithMember};
use crate::DbPool;

/// Column list for votes queries.
const VOTE_COLUMNS: &str = "id, member_id, category, value, rank, created_at";

/// Column list for votes joined with family_members.
const VOTE_MEMBER_COLUMNS: &str = "v.id, v.member_id, fm.name AS member_name, \
    v.category, v.value, v.rank, v.created_at";

/// Provides vote reads, single-vote upserts, and atomic ranked submissions.
pub struct VoteRepo;

impl VoteRepo {
    /// All votes with member names, optionally filtered by category, ordered
    /// by category then rank.
    pub async fn list(
        pool: &DbPool,
        category: Option<&str>,
    ) -> Result<Vec<VoteWithMember>, sqlx::Error> {
        match category {
            Some(category) => {
                let query = format!(
                    "SELECT {VOTE_MEMBER_COLUMNS} FROM votes v \
                     JOIN family_members fm ON fm.id = v.member_id \
                     WHERE v.category = ? \
                     ORDER BY v.category, v.rank"
                );
                sqlx::query_as::<_, VoteWithMember>(&query)
                    .bind(category)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {VOTE_MEMBER_COLUMNS} FROM votes v \
                     JOIN family_members fm ON fm.id = v.member_id \
                     ORDER BY v.category, v.rank"
                );
                sqlx::query_as::<_, VoteWithMember>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Ballots for one category, ordered by member then rank — the input
    /// order the tally's stable sort relies on.
    pub async fn list_by_category(
        pool: &DbPool,
        category: &str,
    ) -> Result<Vec<VoteWithMember>, sqlx::Error> {
        let query = format!(
            "SELECT {VOTE_MEMBER_COLUMNS} FROM votes v \
             JOIN family_members fm ON fm.id = v.member_id \
             WHERE v.category = ? \
             ORDER BY v.member_id, v.rank"
        );
        sqlx::query_as::<_, VoteWithMember>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Upsert a single vote: re-submission for the same (member, category,
    /// value) replaces the rank rather than duplicating the row.
    pub async fn upsert(
        pool: &DbPool,
        member_id: DbId,
        category: &str,
        value: &str,
        rank: i64,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (member_id, category, value, rank) \
             VALUES (?, ?, ?, ?) \
             ON CONFLICT (member_id, category, value) \
             DO UPDATE SET rank = excluded.rank \
             RETURNING {VOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(member_id)
            .bind(category)
            .bind(value)
            .bind(rank)
            .fetch_one(pool)
            .await
    }

    /// Atomically replace all of a member's ballots for a category with the
    /// given rankings. Readers never observe a partial replacement.
    pub async fn replace_ballots(
        pool: &DbPool,
        member_id: DbId,
        category: &str,
        rankings: &[RankedEntry],
    ) -> Result<Vec<Vote>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM votes WHERE member_id = ? AND category = ?")
            .bind(member_id)
            .bind(category)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO votes (member_id, category, value, rank) \
             VALUES (?, ?, ?, ?) \
             RETURNING {VOTE_COLUMNS}"
        );
        let mut inserted = Vec::with_capacity(rankings.len());
        for entry in rankings {
            let row = sqlx::query_as::<_, Vote>(&query)
                .bind(member_id)
                .bind(category)
                .bind(&entry.value)
                .bind(entry.rank)
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(row);
        }

        tx.commit().await?;
        tracing::debug!(member_id, category, ballots = inserted.len(), "Ballots replaced");
        Ok(inserted)
    }
}
