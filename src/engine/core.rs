use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Instant;

use tokio::runtime::Handle;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_QUERY_EVENTS;
use crate::data::DataSource;
use crate::models::{PricePoint, Ticker, TickerSnapshot};

use super::messages::{QueryJob, QueryOutcome};

/// Turns ticker edits into exactly-current view state.
///
/// Every edit gets a monotonically increasing sequence number at issue time.
/// Fetches complete in arbitrary order on the runtime; the accept/discard
/// decision happens single-threaded in `update()`, so the published snapshot
/// always belongs to the highest-sequence request completed so far.
pub struct QueryEngine {
    source: Arc<dyn DataSource>,
    runtime: Handle,

    /// Fetch task results come home through this channel.
    outcome_tx: Sender<QueryOutcome>,
    outcome_rx: Receiver<QueryOutcome>,

    next_sequence: u64,
    /// Floor for acceptance: anything at or below has been superseded.
    last_accepted_sequence: u64,
    /// Ticker of the most recently issued request; suppresses duplicate
    /// fetches for unchanged input (casing and whitespace included).
    issued_ticker: Option<Ticker>,
    in_flight: usize,

    /// THE FRONT BUFFER. The UI reads this every frame; accepted responses
    /// replace the Arc pointer in one assignment.
    snapshot: Option<Arc<TickerSnapshot>>,
    last_error: Option<String>,
}

impl QueryEngine {
    pub fn new(source: Arc<dyn DataSource>, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = channel::<QueryOutcome>();

        Self {
            source,
            runtime,
            outcome_tx,
            outcome_rx,
            next_sequence: 0,
            last_accepted_sequence: 0,
            issued_ticker: None,
            in_flight: 0,
            snapshot: None,
            last_error: None,
        }
    }

    /// Normalizes a raw ticker edit and issues a query for it.
    /// Returns true when a new fetch was actually issued.
    pub fn submit(&mut self, raw: &str) -> bool {
        let Some(ticker) = Ticker::parse(raw) else {
            return false;
        };

        if self.issued_ticker.as_ref() == Some(&ticker) {
            return false;
        }

        self.next_sequence += 1;
        let job = QueryJob {
            ticker: ticker.clone(),
            sequence: self.next_sequence,
        };

        #[cfg(debug_assertions)]
        if PRINT_QUERY_EVENTS {
            log::info!("[query] issuing #{} for {}", job.sequence, job.ticker);
        }

        self.issued_ticker = Some(ticker);
        self.in_flight += 1;
        self.spawn_fetch(job);
        true
    }

    fn spawn_fetch(&self, job: QueryJob) {
        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();

        self.runtime.spawn(async move {
            let started = Instant::now();
            let result = source.fetch_stock(&job.ticker).await;

            // A dead receiver means the app is shutting down; nothing to do.
            let _ = tx.send(QueryOutcome {
                ticker: job.ticker,
                sequence: job.sequence,
                duration_ms: started.elapsed().as_millis(),
                result,
            });
        });
    }

    /// Drains completed fetches. Returns true while requests are still in
    /// flight so the UI keeps repainting.
    pub fn update(&mut self) -> bool {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply_outcome(outcome);
        }

        self.in_flight > 0
    }

    /// Last-writer-wins by issue order: a response at or below the accepted
    /// sequence was superseded while in flight and is dropped on arrival.
    /// An accepted failure raises the floor too (so an older, slower success
    /// can never resurrect a superseded ticker) but leaves the snapshot as-is.
    fn apply_outcome(&mut self, outcome: QueryOutcome) {
        if outcome.sequence <= self.last_accepted_sequence {
            #[cfg(debug_assertions)]
            if PRINT_QUERY_EVENTS {
                log::info!(
                    "[query] dropping superseded #{} for {} (accepted #{})",
                    outcome.sequence,
                    outcome.ticker,
                    self.last_accepted_sequence
                );
            }
            return;
        }

        self.last_accepted_sequence = outcome.sequence;

        match outcome.result {
            Ok(report) => {
                let mut series = Vec::new();
                if let Some(value) = report.prev_close() {
                    series.push(PricePoint {
                        timestamp: chrono::Utc::now(),
                        value,
                    });
                }

                // Single assignment keeps the chart and the pattern list
                // paired to this one response.
                self.snapshot = Some(Arc::new(TickerSnapshot {
                    ticker: outcome.ticker,
                    sequence: outcome.sequence,
                    series,
                    patterns: report.pattern_labels(),
                }));
                self.last_error = None;

                #[cfg(debug_assertions)]
                if PRINT_QUERY_EVENTS {
                    log::info!(
                        "[query] accepted #{} in {}ms",
                        outcome.sequence,
                        outcome.duration_ms
                    );
                }
            }
            Err(err) => {
                // Views keep the previous snapshot; only the status line learns.
                log::error!("[query] fetch for {} failed: {}", outcome.ticker, err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Accessor for UI
    pub fn snapshot(&self) -> Option<&Arc<TickerSnapshot>> {
        self.snapshot.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn current_ticker(&self) -> Option<&Ticker> {
        self.issued_ticker.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use async_trait::async_trait;

    use crate::data::{FetchError, FetchResult, StockReport};

    struct StubSource;

    #[async_trait]
    impl DataSource for StubSource {
        async fn fetch_stock(&self, _ticker: &Ticker) -> FetchResult<StockReport> {
            Err(FetchError::Decode("stub source".to_string()))
        }
    }

    fn test_engine(rt: &tokio::runtime::Runtime) -> QueryEngine {
        QueryEngine::new(Arc::new(StubSource), rt.handle().clone())
    }

    fn report(prev_close: Option<&str>, patterns: &[&str]) -> StockReport {
        let finviz = prev_close.map(|value| {
            let mut map = HashMap::new();
            map.insert(
                "Prev Close".to_string(),
                serde_json::Value::String(value.to_string()),
            );
            map
        });

        StockReport {
            finviz,
            patterns: Some(patterns.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn success(ticker: &str, sequence: u64, report: StockReport) -> QueryOutcome {
        QueryOutcome {
            ticker: Ticker::parse(ticker).unwrap(),
            sequence,
            duration_ms: 0,
            result: Ok(report),
        }
    }

    fn failure(ticker: &str, sequence: u64) -> QueryOutcome {
        QueryOutcome {
            ticker: Ticker::parse(ticker).unwrap(),
            sequence,
            duration_ms: 0,
            result: Err(FetchError::Decode("boom".to_string())),
        }
    }

    #[test]
    fn same_ticker_in_any_casing_issues_one_fetch() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut engine = test_engine(&rt);

        assert!(engine.submit("aapl"));
        assert!(!engine.submit(" AAPL "));
        assert!(!engine.submit("Aapl"));
        assert_eq!(engine.current_ticker().map(|t| t.as_str()), Some("AAPL"));
    }

    #[test]
    fn blank_input_issues_nothing() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut engine = test_engine(&rt);

        assert!(!engine.submit("   "));
        assert!(!engine.is_fetching());
    }

    #[test]
    fn chart_and_patterns_come_from_the_same_response() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut engine = test_engine(&rt);

        engine.apply_outcome(success(
            "AAPL",
            1,
            report(Some("172.35"), &["Head and Shoulders"]),
        ));

        let snapshot = engine.snapshot().unwrap();
        assert_eq!(snapshot.ticker.as_str(), "AAPL");
        assert_eq!(snapshot.series.len(), 1);
        assert_eq!(snapshot.series[0].value, 172.35);
        assert_eq!(snapshot.patterns, vec!["Head and Shoulders".to_string()]);
    }

    #[test]
    fn late_responses_below_the_accepted_sequence_are_dropped() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut engine = test_engine(&rt);

        // Issued as 1, 2, 3 but completing as 3, 1, 2.
        engine.apply_outcome(success("AAA", 3, report(Some("30.0"), &["c"])));
        engine.apply_outcome(success("A", 1, report(Some("10.0"), &["a"])));
        engine.apply_outcome(success("AA", 2, report(Some("20.0"), &["b"])));

        let snapshot = engine.snapshot().unwrap();
        assert_eq!(snapshot.sequence, 3);
        assert_eq!(snapshot.ticker.as_str(), "AAA");
        assert_eq!(snapshot.series[0].value, 30.0);
        assert_eq!(snapshot.patterns, vec!["c".to_string()]);
    }

    #[test]
    fn accepted_failure_keeps_previous_snapshot() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut engine = test_engine(&rt);

        engine.apply_outcome(success("AAPL", 1, report(Some("172.35"), &["Doji"])));
        engine.apply_outcome(failure("MSFT", 2));

        let snapshot = engine.snapshot().unwrap();
        assert_eq!(snapshot.ticker.as_str(), "AAPL");
        assert_eq!(snapshot.series[0].value, 172.35);
        assert!(engine.last_error().is_some());
    }

    #[test]
    fn failed_newer_request_still_blocks_older_success() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut engine = test_engine(&rt);

        engine.apply_outcome(success("AAPL", 1, report(Some("172.35"), &[])));
        engine.apply_outcome(failure("TSLA", 3));
        // The slow response for #2 arrives after #3 already moved the floor.
        engine.apply_outcome(success("MSFT", 2, report(Some("99.0"), &["Flag"])));

        let snapshot = engine.snapshot().unwrap();
        assert_eq!(snapshot.ticker.as_str(), "AAPL");
        assert_eq!(snapshot.sequence, 1);
    }

    #[test]
    fn missing_price_field_yields_empty_series_not_error() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut engine = test_engine(&rt);

        engine.apply_outcome(success(
            "AAPL",
            1,
            StockReport {
                finviz: None,
                patterns: Some(vec!["Doji".to_string()]),
            },
        ));

        let snapshot = engine.snapshot().unwrap();
        assert!(snapshot.series.is_empty());
        assert_eq!(snapshot.patterns, vec!["Doji".to_string()]);
        assert!(engine.last_error().is_none());
    }
}
