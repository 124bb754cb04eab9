#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;

use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use tokio::runtime::Runtime;

use stock_screener::{BackendSupervisor, Cli, LaunchPlan, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Backend Supervision
    // The backend starts before the window so the first fetches can land.
    // A failed spawn only degrades those fetches; it never blocks the UI.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let supervisor = Arc::new(BackendSupervisor::new(rt.handle().clone()));
    let plan = LaunchPlan::from_mode(args.packaged);
    if let Err(e) = supervisor.start(&plan) {
        log::error!("[backend] {e}");
    }

    // D. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    let app_supervisor = Arc::clone(&supervisor);
    let handle = rt.handle().clone();
    let result = eframe::run_native(
        "Stock Screener",
        options,
        Box::new(move |cc| Ok(run_app(cc, app_supervisor, handle))),
    );

    // E. The window is gone; the backend must not outlive it.
    supervisor.stop();

    result
}
