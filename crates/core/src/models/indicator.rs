use serde::{Deserialize, Serialize};

/// Direction of a market indicator, derived from the sign of its change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

/// A displayed market metric (index level, FX rate, commodity price).
///
/// Display-only: indicators are never persisted and never sent to the gateway.
/// The trend always follows the sign of `change`; a serialized `trend` field
/// is ignored on input and rebuilt from `change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawIndicator")]
pub struct MarketIndicator {
    pub name: String,
    /// Pre-formatted value, e.g. "5,342.12" or "$2,345.20".
    pub value: String,
    change: f64,
    trend: Trend,
}

#[derive(Deserialize)]
struct RawIndicator {
    name: String,
    value: String,
    change: f64,
}

impl From<RawIndicator> for MarketIndicator {
    fn from(raw: RawIndicator) -> Self {
        Self::new(raw.name, raw.value, raw.change)
    }
}

impl MarketIndicator {
    pub fn new(name: impl Into<String>, value: impl Into<String>, change: f64) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            change,
            trend: Trend::from_change(change),
        }
    }

    /// Percent change, e.g. `1.25` for +1.25%.
    pub fn change(&self) -> f64 {
        self.change
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Replace the change; the trend moves with it.
    pub fn set_change(&mut self, change: f64) {
        self.change = change;
        self.trend = Trend::from_change(change);
    }
}
