// Backend data access
pub mod stock_api;

// Re-export commonly used types
pub use stock_api::{DataSource, FetchError, FetchResult, HttpDataSource, StockReport};
