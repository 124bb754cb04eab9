use eframe::egui::{RichText, ScrollArea, TextEdit, Ui};

use crate::models::Filters;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum ControlsEventChanged {
    /// Raw ticker field contents; normalization happens in the engine.
    Ticker(String),
    /// The min/max bounds were edited. Captured only, nothing consumes them.
    Filters,
}

/// Panel for the query inputs: the ticker and the captured price bounds.
pub struct ScreenerControlsPanel<'a> {
    ticker_input: &'a mut String,
    filters: &'a mut Filters,
}

impl<'a> ScreenerControlsPanel<'a> {
    pub fn new(ticker_input: &'a mut String, filters: &'a mut Filters) -> Self {
        Self {
            ticker_input,
            filters,
        }
    }

    fn render_ticker_field(&mut self, ui: &mut Ui) -> Option<String> {
        ui.label(colored_subsection_heading(UI_TEXT.ticker_heading));

        let response = ui.add(
            TextEdit::singleline(self.ticker_input)
                .hint_text(UI_TEXT.ticker_hint)
                .desired_width(f32::INFINITY),
        );

        if response.changed() {
            #[cfg(debug_assertions)]
            if PRINT_UI_INTERACTIONS {
                log::info!("Ticker input changed: {:?}", self.ticker_input);
            }
            Some(self.ticker_input.clone())
        } else {
            None
        }
    }

    fn render_filter_fields(&mut self, ui: &mut Ui) -> bool {
        ui.label(colored_subsection_heading(UI_TEXT.filters_heading));

        let mut changed = false;
        changed |= ui
            .add(
                TextEdit::singleline(&mut self.filters.min_price)
                    .hint_text(UI_TEXT.min_price_hint),
            )
            .changed();
        changed |= ui
            .add(
                TextEdit::singleline(&mut self.filters.max_price)
                    .hint_text(UI_TEXT.max_price_hint),
            )
            .changed();

        changed
    }
}

impl<'a> Panel for ScreenerControlsPanel<'a> {
    type Event = ControlsEventChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        if let Some(raw) = self.render_ticker_field(ui) {
            events.push(ControlsEventChanged::Ticker(raw));
        }
        spaced_separator(ui);

        if self.render_filter_fields(ui) {
            events.push(ControlsEventChanged::Filters);
        }
        ui.add_space(20.0);

        events
    }
}

/// Panel listing the detected chart patterns for the current snapshot.
pub struct PatternListPanel<'a> {
    patterns: &'a [String],
}

impl<'a> PatternListPanel<'a> {
    pub fn new(patterns: &'a [String]) -> Self {
        Self { patterns }
    }
}

impl<'a> Panel for PatternListPanel<'a> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.patterns_heading);

        if self.patterns.is_empty() {
            ui.label(
                RichText::new(UI_TEXT.patterns_empty)
                    .small()
                    .color(UI_CONFIG.colors.label),
            );
        } else {
            ScrollArea::vertical()
                .max_height(240.)
                .id_salt("pattern_list")
                .show(ui, |ui| {
                    for pattern in self.patterns {
                        ui.label(
                            RichText::new(format!("• {pattern}"))
                                .color(UI_CONFIG.colors.pattern_item),
                        );
                    }
                });
        }
        ui.add_space(10.0);

        Vec::new()
    }
}
