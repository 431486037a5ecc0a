//! Trip budget calculation.
//!
//! All constants describe one fixed trip: a 14-person party needing 7 rooms,
//! airfare negotiated across four fare tiers, and a hard target band for the
//! total. They are configuration, not derived values; the 7-room multiplier
//! for non-villa resorts must be preserved exactly.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Party configuration
// ---------------------------------------------------------------------------

/// Total travelers.
pub const PARTY_SIZE: i64 = 14;
/// Rooms required at a non-villa resort, regardless of stay length.
pub const ROOMS_NEEDED: i64 = 7;
/// Airfare tiers as (travelers, fare): 3x450 + 5x420 + 4x280 + 2x380 = 5330.
pub const FLIGHT_FARES: &[(i64, i64)] = &[(3, 450), (5, 420), (4, 280), (2, 380)];
/// Total airfare for the whole party, fixed per stay.
pub const FLIGHTS_TOTAL: i64 = 5330;
/// Per-stay round-trip airport transfer when not included by the resort.
pub const TRANSFER_COST: i64 = 360;
/// Excursion budget when the resort includes park access.
pub const EXCURSIONS_WITH_PARKS: i64 = 1400;
/// Excursion budget otherwise, scaled for the full party.
pub const EXCURSIONS_BASE: i64 = 2800;
/// Nightly incidentals when the hidden-cost profile has none recorded.
pub const DEFAULT_EXTRAS_PER_NIGHT: i64 = 20;
/// Stay length assumed when the request does not specify one.
pub const DEFAULT_NIGHTS: i64 = 7;

/// Target band for the total trip cost.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BudgetTarget {
    pub min: i64,
    pub sweet: i64,
    pub max: i64,
}

/// The fixed target band for this trip.
pub const BUDGET_TARGET: BudgetTarget = BudgetTarget {
    min: 20_000,
    sweet: 22_500,
    max: 25_000,
};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Which of the two reference weeks' stored nightly price to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Week {
    #[default]
    Week1,
    Week2,
}

/// Pricing facts about a resort needed to cost a stay.
#[derive(Debug, Clone, Copy)]
pub struct StayPricing {
    pub price_week1: i64,
    pub price_week2: i64,
    /// Villa prices are whole-property per night; resort prices are per room.
    pub is_villa: bool,
}

impl StayPricing {
    pub fn nightly_price(&self, week: Week) -> i64 {
        match week {
            Week::Week1 => self.price_week1,
            Week::Week2 => self.price_week2,
        }
    }
}

/// The subset of a hidden-cost profile the calculator reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenCostInput {
    pub free_transfer: bool,
    pub parks_included: bool,
    /// Nightly incidentals; `None` or zero falls back to the default.
    pub extras: Option<i64>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// The five cost components of a stay.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostComponents {
    pub accommodation: i64,
    pub flights: i64,
    pub transfers: i64,
    pub excursions: i64,
    pub extras: i64,
}

impl CostComponents {
    pub fn total(&self) -> i64 {
        self.accommodation + self.flights + self.transfers + self.excursions + self.extras
    }
}

/// Where a total lands relative to [`BUDGET_TARGET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Under,
    Sweet,
    Over,
}

/// Full budget breakdown for one stay.
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    pub nights: i64,
    pub week: Week,
    pub breakdown: CostComponents,
    pub total: i64,
    pub per_person: i64,
    pub budget_target: BudgetTarget,
    pub budget_status: BudgetStatus,
    /// Distance from the band: min - total when under, total - max when over,
    /// zero in the sweet spot.
    pub budget_diff: i64,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Reject non-positive stay lengths.
pub fn validate_nights(nights: i64) -> Result<(), String> {
    if nights < 1 {
        return Err(format!("nights must be a positive integer, got {nights}"));
    }
    Ok(())
}

/// Compute the full cost breakdown for a stay.
///
/// A missing hidden-cost profile is treated as an empty one (paid transfer,
/// no parks, default extras).
pub fn compute_budget(
    stay: &StayPricing,
    costs: Option<&HiddenCostInput>,
    nights: i64,
    week: Week,
) -> Breakdown {
    let nightly = stay.nightly_price(week);
    let accommodation = if stay.is_villa {
        nightly * nights
    } else {
        nightly * ROOMS_NEEDED * nights
    };

    let costs = costs.copied().unwrap_or_default();
    let transfers = if costs.free_transfer { 0 } else { TRANSFER_COST };
    let excursions = if costs.parks_included {
        EXCURSIONS_WITH_PARKS
    } else {
        EXCURSIONS_BASE
    };
    let extras_per_night = costs
        .extras
        .filter(|&e| e > 0)
        .unwrap_or(DEFAULT_EXTRAS_PER_NIGHT);

    let breakdown = CostComponents {
        accommodation,
        flights: FLIGHTS_TOTAL,
        transfers,
        excursions,
        extras: extras_per_night * nights,
    };

    let total = breakdown.total();
    let per_person = (total as f64 / PARTY_SIZE as f64).round() as i64;

    let (budget_status, budget_diff) = if total <= BUDGET_TARGET.min {
        (BudgetStatus::Under, BUDGET_TARGET.min - total)
    } else if total <= BUDGET_TARGET.max {
        (BudgetStatus::Sweet, 0)
    } else {
        (BudgetStatus::Over, total - BUDGET_TARGET.max)
    };

    Breakdown {
        nights,
        week,
        breakdown,
        total,
        per_person,
        budget_target: BUDGET_TARGET,
        budget_status,
        budget_diff,
    }
}
