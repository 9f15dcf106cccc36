use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::gateway::request::{GenerateRequest, ResponseSchema, Tool};
use crate::gateway::traits::Gateway;
use crate::models::calendar::{CalendarEvent, EventCategory, ImpactLevel};
use super::adapter::{parse_json_list, QueryAdapter};
use super::prompts;

/// Output schema: array of `{id, date, title, type, impact}` with closed sets
/// for `type` and `impact`.
pub fn calendar_schema() -> ResponseSchema {
    ResponseSchema::array_of(ResponseSchema::object([
        ("id", ResponseSchema::string()),
        ("date", ResponseSchema::string()),
        ("title", ResponseSchema::string()),
        (
            "type",
            ResponseSchema::enumeration(EventCategory::ALL.iter().map(|c| c.as_str())),
        ),
        (
            "impact",
            ResponseSchema::enumeration(ImpactLevel::ALL.iter().map(|i| i.as_str())),
        ),
    ]))
}

/// Earnings, Fed and macro-release dates for this week and next.
pub struct CalendarService {
    gateway: Arc<dyn Gateway>,
    model: String,
}

impl CalendarService {
    pub fn new(gateway: Arc<dyn Gateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QueryAdapter for CalendarService {
    type Input = ();
    type Output = Vec<CalendarEvent>;

    fn use_case(&self) -> &'static str {
        "calendar"
    }

    fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    fn build_request(&self, _input: &()) -> Result<GenerateRequest, CoreError> {
        Ok(GenerateRequest::new(&self.model, prompts::CALENDAR_PROMPT)
            .tool(Tool::WebSearch)
            .schema(calendar_schema()))
    }

    fn parse(&self, text: &str) -> Result<Vec<CalendarEvent>, CoreError> {
        parse_json_list(self.use_case(), text)
    }

    fn fallback(&self) -> Vec<CalendarEvent> {
        Vec::new()
    }
}
