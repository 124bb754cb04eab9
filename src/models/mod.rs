// Core data types shared between the engine and the views
pub mod snapshot;
pub mod ticker;

// Re-export commonly used types
pub use snapshot::{Filters, PricePoint, TickerSnapshot};
pub use ticker::Ticker;
