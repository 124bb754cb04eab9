use std::sync::Arc;

use eframe::{Frame, egui};

use crate::engine::QueryEngine;
use crate::models::Filters;
use crate::supervisor::BackendSupervisor;
use crate::ui::chart_view::ChartView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SHUTDOWN;

/// Pre-filled on startup so the window opens with data on its way.
const DEFAULT_TICKER: &str = "AAPL";

/// The one application window: query inputs, price chart, pattern list.
///
/// All mutable state lives here on the GUI thread. The engine's fetch tasks
/// and the supervisor's monitor task only talk back through channels and
/// shared status handles, never by touching this struct.
pub struct ScreenerApp {
    // UI state
    pub(super) ticker_input: String,
    pub(super) filters: Filters,

    // Query + process state
    pub(super) engine: QueryEngine,
    pub(super) supervisor: Arc<BackendSupervisor>,

    pub(super) chart_view: ChartView,
}

impl ScreenerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut engine: QueryEngine,
        supervisor: Arc<BackendSupervisor>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        // Kick off the first query for the default ticker immediately; if the
        // backend is still coming up this fails like any other fetch.
        let ticker_input = DEFAULT_TICKER.to_string();
        engine.submit(&ticker_input);

        Self {
            ticker_input,
            filters: Filters::default(),
            engine,
            supervisor,
            chart_view: ChartView::default(),
        }
    }
}

impl eframe::App for ScreenerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // The window is closing; the backend must not outlive it.
        self.supervisor.stop();

        #[cfg(debug_assertions)]
        if PRINT_SHUTDOWN {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Drain completed fetches before rendering this frame.
        let busy = self.engine.update();

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);

        if busy {
            ctx.request_repaint();
        }
    }
}
