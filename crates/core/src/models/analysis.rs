use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One AI-generated answer to a free-text question.
/// Replaced wholesale by the next query; never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub query: String,
    pub body: String,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(query: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            body: body.into(),
            generated_at: Utc::now(),
        }
    }
}
