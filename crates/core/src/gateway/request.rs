use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Primitive type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Object,
    Array,
}

/// Output schema attached to a structured request (OpenAPI subset).
///
/// Object nodes built with [`ResponseSchema::object`] mark every field as
/// required and remember declaration order in `property_ordering`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, ResponseSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_ordering: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
}

impl ResponseSchema {
    fn bare(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            enum_values: None,
            properties: None,
            property_ordering: None,
            required: None,
            items: None,
        }
    }

    pub fn string() -> Self {
        Self::bare(SchemaType::String)
    }

    /// A string restricted to a closed set of values.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            ..Self::bare(SchemaType::String)
        }
    }

    /// An object whose fields are all required.
    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, ResponseSchema)>,
        S: Into<String>,
    {
        let mut properties = BTreeMap::new();
        let mut ordering = Vec::new();
        for (name, schema) in fields {
            let name = name.into();
            ordering.push(name.clone());
            properties.insert(name, schema);
        }
        Self {
            properties: Some(properties),
            required: Some(ordering.clone()),
            property_ordering: Some(ordering),
            ..Self::bare(SchemaType::Object)
        }
    }

    pub fn array_of(items: ResponseSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::bare(SchemaType::Array)
        }
    }

    /// Names of the required fields of an object node (empty otherwise).
    pub fn required_fields(&self) -> &[String] {
        self.required.as_deref().unwrap_or(&[])
    }
}

/// Server-side tools the gateway may consult before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Ground the answer in a live web search.
    WebSearch,
}

/// Sampling and output options of a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    /// Token budget for the model's internal reasoning, when supported.
    pub thinking_budget: Option<u32>,
    /// When set, the response text must be JSON matching this schema.
    pub response_schema: Option<ResponseSchema>,
    pub tools: Vec<Tool>,
    pub system_instruction: Option<String>,
}

/// One request to the gateway: model, prompt and config.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub config: GenerateConfig,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            config: GenerateConfig::default(),
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.config.top_p = Some(top_p);
        self
    }

    pub fn thinking_budget(mut self, tokens: u32) -> Self {
        self.config.thinking_budget = Some(tokens);
        self
    }

    pub fn schema(mut self, schema: ResponseSchema) -> Self {
        self.config.response_schema = Some(schema);
        self
    }

    pub fn tool(mut self, tool: Tool) -> Self {
        if !self.config.tools.contains(&tool) {
            self.config.tools.push(tool);
        }
        self
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.config.system_instruction = Some(instruction.into());
        self
    }

    #[must_use]
    pub fn wants_json(&self) -> bool {
        self.config.response_schema.is_some()
    }

    #[must_use]
    pub fn uses_web_search(&self) -> bool {
        self.config.tools.contains(&Tool::WebSearch)
    }
}

/// Raw gateway answer. For structured requests `text` holds a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: String,
}

impl GenerateResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
