use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::gateway::request::GenerateRequest;
use crate::gateway::traits::Gateway;
use super::adapter::QueryAdapter;
use super::prompts;

/// Two-sentence macro summary of current market sentiment.
///
/// Free text, no web search, answered in the persona of a chief macro
/// strategist. Empty answers and failures both render [`prompts::MACRO_FALLBACK`].
pub struct MacroSummaryService {
    gateway: Arc<dyn Gateway>,
    model: String,
}

impl MacroSummaryService {
    pub fn new(gateway: Arc<dyn Gateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QueryAdapter for MacroSummaryService {
    type Input = ();
    type Output = String;

    fn use_case(&self) -> &'static str {
        "macro_summary"
    }

    fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    fn build_request(&self, _input: &()) -> Result<GenerateRequest, CoreError> {
        Ok(GenerateRequest::new(&self.model, prompts::MACRO_PROMPT)
            .system_instruction(prompts::MACRO_SYSTEM_INSTRUCTION))
    }

    fn parse(&self, text: &str) -> Result<String, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            Ok(prompts::MACRO_FALLBACK.to_string())
        } else {
            Ok(text.to_string())
        }
    }

    fn fallback(&self) -> String {
        prompts::MACRO_FALLBACK.to_string()
    }
}
