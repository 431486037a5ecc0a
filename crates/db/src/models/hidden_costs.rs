use planner_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `hidden_costs` table, one-to-one with a resort.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HiddenCosts {
    pub resort_id: DbId,
    pub resort_fee: i64,
    pub tips: i64,
    pub transfer: i64,
    pub extras: i64,
    pub free_transfer: bool,
    pub resort_credits: Option<i64>,
    pub parks_included: bool,
    pub parks_value: Option<i64>,
}

impl HiddenCosts {
    /// The subset the budget calculator reads.
    pub fn budget_input(&self) -> planner_core::budget::HiddenCostInput {
        planner_core::budget::HiddenCostInput {
            free_transfer: self.free_transfer,
            parks_included: self.parks_included,
            extras: Some(self.extras),
        }
    }
}
