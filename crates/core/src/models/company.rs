use serde::{Deserialize, Serialize};

/// A tradable company. The ticker is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    /// Approximate latest price as a display string (e.g. "$124.50").
    pub price: String,
    pub description: String,
}

impl Company {
    pub fn new(
        ticker: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            sector: sector.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    /// Whether `ticker` names this company (trimmed, case-insensitive).
    pub fn has_ticker(&self, ticker: &str) -> bool {
        self.ticker.trim().eq_ignore_ascii_case(ticker.trim())
    }
}
