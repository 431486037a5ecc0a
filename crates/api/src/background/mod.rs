//! Background tasks spawned at server startup.

pub mod price_scrape;
