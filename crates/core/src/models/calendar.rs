use serde::{Deserialize, Serialize};

/// Category of a scheduled economic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    /// Corporate earnings release
    Earnings,
    /// Macro data release (CPI, PPI, payrolls, ...)
    Macro,
    /// Central bank decision or minutes
    Fed,
}

impl EventCategory {
    pub const ALL: [EventCategory; 3] = [
        EventCategory::Earnings,
        EventCategory::Macro,
        EventCategory::Fed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Earnings => "earnings",
            EventCategory::Macro => "macro",
            EventCategory::Fed => "fed",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected market impact of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 3] = [ImpactLevel::High, ImpactLevel::Medium, ImpactLevel::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::High => "high",
            ImpactLevel::Medium => "medium",
            ImpactLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled economic event.
///
/// Wire field `type` maps to `category`. Unknown categories or impact levels
/// fail deserialization, which rejects the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub date: String,
    pub title: String,
    #[serde(rename = "type")]
    pub category: EventCategory,
    pub impact: ImpactLevel,
}
