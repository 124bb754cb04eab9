use crate::data::{FetchError, StockReport};
use crate::models::Ticker;

/// A single query in flight, identified by its issue-order sequence number.
#[derive(Debug, Clone)]
pub struct QueryJob {
    pub ticker: Ticker,
    pub sequence: u64,
}

/// The outcome a fetch task delivers back to the GUI thread.
#[derive(Debug)]
pub struct QueryOutcome {
    pub ticker: Ticker,
    pub sequence: u64,
    pub duration_ms: u128,
    pub result: Result<StockReport, FetchError>,
}
