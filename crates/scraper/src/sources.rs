//! Simulated price sources.
//!
//! In production this would drive a real scraper; here each source is a
//! static table of base nightly prices per resort for the two reference
//! weeks. Not every source lists every resort.

use planner_core::types::DbId;

/// One simulated booking site.
pub struct PriceSource {
    /// Stored in the `source` column of price_history.
    pub key: &'static str,
    /// Human-readable name for logs.
    pub name: &'static str,
    /// (resort id, week-1 base price, week-2 base price).
    pub prices: &'static [(DbId, i64, i64)],
}

/// All simulated sources, scraped in order.
pub const SOURCES: &[PriceSource] = &[
    PriceSource {
        key: "costco",
        name: "Costco Travel",
        prices: &[
            (1, 375, 415),
            (2, 310, 350),
            (3, 340, 390),
            (11, 410, 470),
            (16, 470, 530),
        ],
    },
    PriceSource {
        key: "expedia",
        name: "Expedia",
        prices: &[
            (1, 385, 425),
            (2, 325, 365),
            (3, 355, 405),
            (4, 485, 525),
            (11, 425, 485),
            (12, 555, 625),
            (16, 485, 545),
        ],
    },
    PriceSource {
        key: "booking",
        name: "Booking.com",
        prices: &[
            (1, 380, 420),
            (2, 320, 360),
            (3, 350, 400),
            (4, 480, 520),
            (11, 420, 480),
            (12, 550, 620),
            (16, 480, 540),
        ],
    },
];
