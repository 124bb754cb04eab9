use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::BACKEND;
use crate::models::Ticker;

/// Result type alias for backend fetches.
pub type FetchResult<T> = Result<T, FetchError>;

/// A per-ticker query that could not be completed.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (connection refused, reset, ...)
    Http(reqwest::Error),
    /// Backend answered with a non-success status
    Status(reqwest::StatusCode),
    /// Body was not the expected JSON shape
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "request failed: {e}"),
            FetchError::Status(status) => write!(f, "backend returned {status}"),
            FetchError::Decode(msg) => write!(f, "unexpected payload: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

/// The combined per-ticker payload served by `/stock/{ticker}`.
///
/// Both views are projections of this one payload. Fields beyond the two we
/// read are ignored by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct StockReport {
    #[serde(default)]
    pub finviz: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
}

impl StockReport {
    /// Price projection: `finviz["Prev Close"]`, thousands separators
    /// stripped. Absent or unparseable values yield `None` rather than an
    /// error.
    pub fn prev_close(&self) -> Option<f64> {
        let raw = self.finviz.as_ref()?.get("Prev Close")?.as_str()?;
        raw.replace(',', "").trim().parse::<f64>().ok()
    }

    /// Pattern projection: the `patterns` field, empty when absent.
    pub fn pattern_labels(&self) -> Vec<String> {
        self.patterns.clone().unwrap_or_default()
    }
}

/// Capability boundary for the screener's per-ticker queries. The engine only
/// ever sees this trait, never the HTTP client underneath.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_stock(&self, ticker: &Ticker) -> FetchResult<StockReport>;
}

/// Fetches stock reports from the locally supervised backend over HTTP.
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new() -> Self {
        Self::with_base_url(BACKEND.http.base_url.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        // No request timeout: late responses are superseded by sequence
        // number, not by deadline.
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for HttpDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_stock(&self, ticker: &Ticker) -> FetchResult<StockReport> {
        let url = format!("{}/stock/{}", self.base_url, ticker);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> StockReport {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn prev_close_parses_plain_decimal() {
        let report =
            decode(r#"{"finviz":{"Prev Close":"172.35"},"patterns":["Head and Shoulders"]}"#);
        assert_eq!(report.prev_close(), Some(172.35));
        assert_eq!(report.pattern_labels(), vec!["Head and Shoulders".to_string()]);
    }

    #[test]
    fn prev_close_strips_thousands_separators() {
        let report = decode(r#"{"finviz":{"Prev Close":"1,234.56"},"patterns":[]}"#);
        assert_eq!(report.prev_close(), Some(1234.56));
    }

    #[test]
    fn missing_finviz_yields_no_price_but_patterns_survive() {
        let report = decode(r#"{"patterns":["Doji"]}"#);
        assert_eq!(report.prev_close(), None);
        assert_eq!(report.pattern_labels(), vec!["Doji".to_string()]);
    }

    #[test]
    fn missing_patterns_yield_empty_list() {
        let report = decode(r#"{"finviz":{"Prev Close":"10.5"}}"#);
        assert_eq!(report.prev_close(), Some(10.5));
        assert!(report.pattern_labels().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let report = decode(
            r#"{"finviz":{"Prev Close":"10.0","Market Cap":"2.8T","P/E":28.4},
                "patterns":[],
                "news":[{"headline":"irrelevant"}]}"#,
        );
        assert_eq!(report.prev_close(), Some(10.0));
    }

    #[test]
    fn non_numeric_prev_close_yields_no_price() {
        let report = decode(r#"{"finviz":{"Prev Close":"-"},"patterns":[]}"#);
        assert_eq!(report.prev_close(), None);
    }
}
