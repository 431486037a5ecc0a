//! Repository for the `comments` table.

use planner_core::types::DbId;

use crate::models::comment::{Comment, CommentWithMember, CreateComment};
use crate::DbPool;

/// Column list for comments queries.
const COMMENT_COLUMNS: &str = "id, resort_id, member_id, content, created_at";

/// Provides comment creation and per-resort listing.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (resort_id, member_id, content) \
             VALUES (?, ?, ?) \
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.resort_id)
            .bind(input.member_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Comments for a resort with member names, newest first.
    pub async fn list_for_resort(
        pool: &DbPool,
        resort_id: DbId,
    ) -> Result<Vec<CommentWithMember>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithMember>(
            "SELECT c.id, c.resort_id, c.member_id, fm.name AS member_name, \
                    c.content, c.created_at \
             FROM comments c \
             LEFT JOIN family_members fm ON fm.id = c.member_id \
             WHERE c.resort_id = ? \
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .bind(resort_id)
        .fetch_all(pool)
        .await
    }
}
