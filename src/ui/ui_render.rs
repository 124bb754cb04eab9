use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Margin, RichText, SidePanel, TopBottomPanel,
};

use crate::supervisor::ProcessStatus;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ControlsEventChanged, Panel, PatternListPanel, ScreenerControlsPanel};
use crate::ui::utils::format_price;

use super::app::ScreenerApp;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

impl ScreenerApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(180.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = {
                    let mut panel =
                        ScreenerControlsPanel::new(&mut self.ticker_input, &mut self.filters);
                    panel.render(ui)
                };

                for event in events {
                    match event {
                        ControlsEventChanged::Ticker(raw) => {
                            // Every edit becomes a query; stale responses are
                            // dropped by the engine's sequence check.
                            self.engine.submit(&raw);
                        }
                        ControlsEventChanged::Filters => {
                            // Captured only; no query or view applies these yet.
                            #[cfg(debug_assertions)]
                            if PRINT_UI_INTERACTIONS {
                                log::info!(
                                    "Filters captured: min={:?} max={:?}",
                                    self.filters.min_price,
                                    self.filters.max_price
                                );
                            }
                        }
                    }
                }

                let patterns: Vec<String> = self
                    .engine
                    .snapshot()
                    .map(|snapshot| snapshot.patterns.clone())
                    .unwrap_or_default();
                let mut panel = PatternListPanel::new(&patterns);
                panel.render(ui);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading(RichText::new(UI_TEXT.app_heading).color(UI_CONFIG.colors.heading));
                ui.add_space(10.0);

                let snapshot = self.engine.snapshot().cloned();
                match snapshot {
                    Some(snapshot) if !snapshot.series.is_empty() => {
                        self.chart_view.show(ui, &snapshot);
                    }
                    Some(snapshot) => {
                        // Accepted response without a usable price field.
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.heading(format!("{}: {}", snapshot.ticker, UI_TEXT.chart_empty));
                        });
                    }
                    None if self.engine.is_fetching() => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.add_space(12.0);
                            ui.heading(UI_TEXT.chart_loading);
                        });
                    }
                    None => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.heading(UI_TEXT.chart_waiting);
                            if let Some(error) = self.engine.last_error() {
                                ui.add_space(10.0);
                                ui.label(
                                    RichText::new(error).small().color(Color32::from_gray(190)),
                                );
                            }
                        });
                    }
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Backend process health
                    let status = self.supervisor.status();
                    let color = match status {
                        ProcessStatus::Running => UI_CONFIG.colors.status_ok,
                        ProcessStatus::Starting => UI_CONFIG.colors.status_warn,
                        _ => UI_CONFIG.colors.status_error,
                    };
                    ui.metric(UI_TEXT.status_backend_label, &status.to_string(), color);
                    if let Some(pid) = self.supervisor.pid() {
                        ui.label_subdued(format!("pid {pid}"));
                    }
                    ui.separator();

                    // 2. Current snapshot
                    if let Some(snapshot) = self.engine.snapshot() {
                        ui.metric("💰", snapshot.ticker.as_str(), UI_CONFIG.colors.chart_line);
                        if let Some(point) = snapshot.series.last() {
                            ui.label_subdued(format!("prev close {}", format_price(point.value)));
                        }
                        ui.label_subdued(format!("{} patterns", snapshot.patterns.len()));
                        ui.separator();
                    }

                    // 3. Fetch activity
                    if self.engine.is_fetching() {
                        ui.label_warning(UI_TEXT.status_fetching);
                        ui.separator();
                    }

                    // 4. Last fetch error; the views keep their previous data.
                    if let Some(error) = self.engine.last_error() {
                        ui.label_error(error);
                    }
                });
            });
    }
}
