use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::settings::Settings;
use super::request::{GenerateRequest, GenerateResponse, ResponseSchema, Tool};
use super::traits::Gateway;

const PROVIDER: &str = "Gemini";

/// Google Generative Language REST gateway (`models/{model}:generateContent`).
///
/// - **Requires**: API key (`Settings::api_key`), sent as `x-goog-api-key`.
/// - **Structured output**: `responseMimeType: application/json` + `responseSchema`.
/// - **Web search**: the `googleSearch` grounding tool.
///
/// Without a key every call fails fast with `MissingCredential`; no request
/// leaves the process.
pub struct GeminiGateway {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(settings: &Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key: settings
                .api_key
                .as_ref()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

// ── Gemini API request types ────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ToolBody>,
    #[serde(skip_serializing_if = "GenerationConfig::is_empty")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolBody {
    google_search: EmptyObject,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a ResponseSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

impl GenerationConfig<'_> {
    fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.top_p.is_none()
            && self.response_mime_type.is_none()
            && self.response_schema.is_none()
            && self.thinking_config.is_none()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

fn build_body(request: &GenerateRequest) -> RequestBody<'_> {
    let config = &request.config;
    RequestBody {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![TextPart { text: &request.prompt }],
        }],
        system_instruction: config.system_instruction.as_deref().map(|text| Content {
            role: None,
            parts: vec![TextPart { text }],
        }),
        tools: config
            .tools
            .iter()
            .map(|tool| match tool {
                Tool::WebSearch => ToolBody {
                    google_search: EmptyObject {},
                },
            })
            .collect(),
        generation_config: GenerationConfig {
            temperature: config.temperature,
            top_p: config.top_p,
            response_mime_type: config
                .response_schema
                .as_ref()
                .map(|_| "application/json"),
            response_schema: config.response_schema.as_ref(),
            thinking_config: config.thinking_budget.map(|thinking_budget| ThinkingConfig {
                thinking_budget,
            }),
        },
    }
}

// ── Gemini API response types ───────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
    /// Reasoning summaries are not part of the answer.
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Concatenated answer text of the first candidate. Empty when the model
/// returned nothing (e.g. blocked prompt).
fn extract_text(body: ResponseBody) -> String {
    body.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Gateway for GeminiGateway {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, CoreError> {
        let api_key = self.api_key.as_deref().ok_or(CoreError::MissingCredential)?;

        tracing::debug!(
            model = %request.model,
            structured = request.wants_json(),
            web_search = request.uses_web_search(),
            "sending generateContent request"
        );

        let resp = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&build_body(request))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&raw)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("{status}: {message}"),
            });
        }

        let body: ResponseBody = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse generateContent response: {e}"),
        })?;

        Ok(GenerateResponse::new(extract_text(body)))
    }
}
