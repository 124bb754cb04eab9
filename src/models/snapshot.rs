use chrono::{DateTime, Utc};

use crate::models::ticker::Ticker;

/// A single chart point: observation time and price value.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Everything the views render for one accepted response.
///
/// THE FRONT BUFFER payload. The chart series and the pattern list travel
/// together in a single struct that is replaced wholesale, so the two views
/// can never show data from two different responses.
#[derive(Debug, Clone)]
pub struct TickerSnapshot {
    pub ticker: Ticker,
    /// Issue-order sequence number of the response this snapshot came from.
    pub sequence: u64,
    /// Chronologically ordered price points (currently at most one).
    pub series: Vec<PricePoint>,
    /// Pattern labels in received order, duplicates allowed.
    pub patterns: Vec<String>,
}

/// Min/max price bounds captured from the window.
///
/// Captured only: nothing applies these to queries or rendering yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub min_price: String,
    pub max_price: String,
}
