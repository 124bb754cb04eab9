use std::fmt;

/// A normalized ticker symbol: trimmed, uppercased, never empty.
///
/// Normalization happens exactly once, at construction, so every place that
/// compares or transmits tickers works on the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Normalizes raw user input. Returns `None` when nothing remains after
    /// trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_input_is_uppercased() {
        let ticker = Ticker::parse("aapl").unwrap();
        assert_eq!(ticker.as_str(), "AAPL");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let ticker = Ticker::parse("  msft \n").unwrap();
        assert_eq!(ticker.as_str(), "MSFT");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(Ticker::parse("").is_none());
        assert!(Ticker::parse("   ").is_none());
    }

    #[test]
    fn same_symbol_in_any_casing_compares_equal() {
        assert_eq!(Ticker::parse("Tsla"), Ticker::parse(" TSLA"));
    }
}
