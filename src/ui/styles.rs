use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Semantic text helpers hung directly off `egui::Ui`, so status-bar code
/// reads as intent rather than inline styling.
pub trait UiStyleExt {
    /// Small secondary-detail text.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// A `label: value` pair; subdued label, colored value.
    fn metric(&mut self, label: &str, value: &str, value_color: Color32);

    /// Failure text on the status line.
    fn label_error(&mut self, text: impl Into<String>);

    /// In-progress text on the status line.
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, value_color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{label}:"));
            ui.label(RichText::new(value).small().color(value_color));
        });
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(UI_CONFIG.colors.status_error),
        );
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(UI_CONFIG.colors.status_warn),
        );
    }
}
