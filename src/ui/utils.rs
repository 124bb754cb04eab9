use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Uppercase monospace heading in the global heading color.
pub fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into().to_uppercase() + ":")
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sub-section heading in the configured accent color.
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Dark theme with the screener's panel fills and widget strokes. Applied
/// once at startup; the palette never changes at runtime.
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Section heading with standard spacing above and below.
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Separator with standard spacing.
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats a price for the status line. Sub-dollar symbols get extra digits
/// so small moves stay visible.
pub fn format_price(price: f64) -> String {
    if price == 0.0 || price.abs() >= 1.0 {
        format!("${price:.2}")
    } else {
        format!("${price:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting_scales_with_magnitude() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.5), "$1234.50");
        assert_eq!(format_price(172.35), "$172.35");
        assert_eq!(format_price(0.5), "$0.5000");
        assert_eq!(format_price(-2.5), "$-2.50");
    }
}
