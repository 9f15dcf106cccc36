use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::gateway::request::{GenerateRequest, ResponseSchema, Tool};
use crate::gateway::traits::Gateway;
use crate::models::news::{image_for_position, NewsItem};
use super::adapter::{dedup_by_key, parse_json_list, QueryAdapter};
use super::prompts;

/// Wire shape of one news item. Every field is required.
#[derive(Deserialize)]
struct NewsPayload {
    id: String,
    title: String,
    summary: String,
    source: String,
    date: String,
}

/// Output schema: array of `{id, title, summary, source, date}`, all strings.
pub fn news_schema() -> ResponseSchema {
    ResponseSchema::array_of(ResponseSchema::object([
        ("id", ResponseSchema::string()),
        ("title", ResponseSchema::string()),
        ("summary", ResponseSchema::string()),
        ("source", ResponseSchema::string()),
        ("date", ResponseSchema::string()),
    ]))
}

/// Most-read economic headlines of the last three days, web-search grounded.
///
/// The batch keeps the gateway's ranking. Each item gets its image reference
/// from its position in the batch, after duplicate ids are dropped.
pub struct NewsService {
    gateway: Arc<dyn Gateway>,
    model: String,
}

impl NewsService {
    pub fn new(gateway: Arc<dyn Gateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QueryAdapter for NewsService {
    type Input = ();
    type Output = Vec<NewsItem>;

    fn use_case(&self) -> &'static str {
        "news"
    }

    fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    fn build_request(&self, _input: &()) -> Result<GenerateRequest, CoreError> {
        Ok(GenerateRequest::new(&self.model, prompts::NEWS_PROMPT)
            .tool(Tool::WebSearch)
            .schema(news_schema()))
    }

    fn parse(&self, text: &str) -> Result<Vec<NewsItem>, CoreError> {
        let raw: Vec<NewsPayload> = parse_json_list(self.use_case(), text)?;
        let unique = dedup_by_key(self.use_case(), raw, |item| item.id.clone());
        Ok(unique
            .into_iter()
            .enumerate()
            .map(|(position, item)| NewsItem {
                id: item.id,
                title: item.title,
                summary: item.summary,
                source: item.source,
                date: item.date,
                image_url: image_for_position(position),
            })
            .collect())
    }

    fn fallback(&self) -> Vec<NewsItem> {
        Vec::new()
    }
}
