use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::gateway::request::GenerateRequest;
use crate::gateway::traits::Gateway;
use super::adapter::{require_query, QueryAdapter};
use super::prompts;

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const THINKING_BUDGET: u32 = 2000;

/// Free-text investor-style analysis of a user question.
///
/// Runs on the analysis ("pro") model with a reasoning budget and without web
/// search. An empty answer is not an error: it becomes
/// [`prompts::ANALYSIS_EMPTY`]. Failures render [`prompts::ANALYSIS_FAILED`].
pub struct AnalysisService {
    gateway: Arc<dyn Gateway>,
    model: String,
}

impl AnalysisService {
    pub fn new(gateway: Arc<dyn Gateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QueryAdapter for AnalysisService {
    type Input = str;
    type Output = String;

    fn use_case(&self) -> &'static str {
        "analysis"
    }

    fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    fn build_request(&self, query: &str) -> Result<GenerateRequest, CoreError> {
        let query = require_query(query)?;
        Ok(GenerateRequest::new(&self.model, prompts::analysis_prompt(query))
            .temperature(TEMPERATURE)
            .top_p(TOP_P)
            .thinking_budget(THINKING_BUDGET))
    }

    fn parse(&self, text: &str) -> Result<String, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            Ok(prompts::ANALYSIS_EMPTY.to_string())
        } else {
            Ok(text.to_string())
        }
    }

    fn fallback(&self) -> String {
        prompts::ANALYSIS_FAILED.to_string()
    }
}
