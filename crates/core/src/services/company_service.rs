use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::gateway::request::{GenerateRequest, ResponseSchema, Tool};
use crate::gateway::traits::Gateway;
use crate::models::company::Company;
use super::adapter::{dedup_by_key, parse_json_list, require_query, QueryAdapter};
use super::prompts;

/// Output schema: array of `{ticker, name, sector, price, description}`, all strings.
pub fn company_schema() -> ResponseSchema {
    ResponseSchema::array_of(ResponseSchema::object([
        ("ticker", ResponseSchema::string()),
        ("name", ResponseSchema::string()),
        ("sector", ResponseSchema::string()),
        ("price", ResponseSchema::string()),
        ("description", ResponseSchema::string()),
    ]))
}

/// Finds US-listed companies related to a free-text query.
///
/// Results are unique by ticker (trimmed, case-insensitive); the first
/// occurrence wins.
pub struct CompanySearchService {
    gateway: Arc<dyn Gateway>,
    model: String,
}

impl CompanySearchService {
    pub fn new(gateway: Arc<dyn Gateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QueryAdapter for CompanySearchService {
    type Input = str;
    type Output = Vec<Company>;

    fn use_case(&self) -> &'static str {
        "company_search"
    }

    fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    fn build_request(&self, query: &str) -> Result<GenerateRequest, CoreError> {
        let query = require_query(query)?;
        Ok(GenerateRequest::new(&self.model, prompts::company_search_prompt(query))
            .tool(Tool::WebSearch)
            .schema(company_schema()))
    }

    fn parse(&self, text: &str) -> Result<Vec<Company>, CoreError> {
        let companies: Vec<Company> = parse_json_list(self.use_case(), text)?;
        Ok(dedup_by_key(self.use_case(), companies, |c| {
            c.ticker.trim().to_ascii_uppercase()
        }))
    }

    fn fallback(&self) -> Vec<Company> {
        Vec::new()
    }
}
