use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub chart_line: Color32,
    pub pattern_item: Color32,
    pub status_ok: Color32,
    pub status_warn: Color32,
    pub status_error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 24, 30),
        side_panel: Color32::from_rgb(25, 25, 25),
        chart_line: Color32::from_rgb(100, 200, 255),
        pattern_item: Color32::from_rgb(130, 200, 140),
        status_ok: Color32::from_rgb(100, 200, 100),
        status_warn: Color32::from_rgb(255, 215, 0),
        status_error: Color32::from_rgb(255, 100, 100),
    },
};

/// Static UI strings, collected so panels never hardcode copy inline.
pub struct UiText {
    pub app_heading: &'static str,
    pub controls_heading: &'static str,
    pub ticker_heading: &'static str,
    pub ticker_hint: &'static str,
    pub filters_heading: &'static str,
    pub min_price_hint: &'static str,
    pub max_price_hint: &'static str,
    pub patterns_heading: &'static str,
    pub patterns_empty: &'static str,
    pub chart_empty: &'static str,
    pub chart_loading: &'static str,
    pub chart_waiting: &'static str,
    pub status_backend_label: &'static str,
    pub status_fetching: &'static str,
}

/// Global UI text instance
pub static UI_TEXT: UiText = UiText {
    app_heading: "Stock Screener",
    controls_heading: "Screener",
    ticker_heading: "Ticker",
    ticker_hint: "Enter ticker...",
    filters_heading: "Price Filters",
    min_price_hint: "Min Price",
    max_price_hint: "Max Price",
    patterns_heading: "Detected Patterns",
    patterns_empty: "No patterns detected",
    chart_empty: "no price data in the last response",
    chart_loading: "Loading stock data...",
    chart_waiting: "Enter a ticker to load data",
    status_backend_label: "📡 Backend",
    status_fetching: "⚙ Fetching...",
};
