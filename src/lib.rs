// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod supervisor;
pub mod ui;

// Re-export commonly used types
pub use data::{DataSource, HttpDataSource, StockReport};
pub use engine::QueryEngine;
pub use models::{Filters, Ticker, TickerSnapshot};
pub use supervisor::{BackendSupervisor, LaunchPlan, ProcessStatus};
pub use ui::ScreenerApp;

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Launch the bundled backend executable instead of the dev interpreter
    #[arg(long, default_value_t = false)]
    pub packaged: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext<'_>,
    supervisor: Arc<BackendSupervisor>,
    runtime: tokio::runtime::Handle,
) -> Box<dyn eframe::App> {
    let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::new());
    let engine = QueryEngine::new(source, runtime);

    let app = ui::ScreenerApp::new(cc, engine, supervisor);
    Box::new(app)
}
