//! Repository for the `family_members` table.

use crate::models::family_member::FamilyMember;
use crate::DbPool;

/// Column list for family_members queries.
const MEMBER_COLUMNS: &str = "id, name, group_name, created_at";

/// Read operations for family members (rows are seeded, not created via the
/// API).
pub struct FamilyRepo;

impl FamilyRepo {
    /// List everyone, grouped then alphabetical.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<FamilyMember>, sqlx::Error> {
        let query =
            format!("SELECT {MEMBER_COLUMNS} FROM family_members ORDER BY group_name, name");
        sqlx::query_as::<_, FamilyMember>(&query)
            .fetch_all(pool)
            .await
    }
}
