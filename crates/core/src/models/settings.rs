use serde::{Deserialize, Serialize};

/// Default REST endpoint of the generative-language gateway.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for deep free-text analysis.
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-pro-preview";

/// Default model for summaries and search-grounded structured lists.
pub const DEFAULT_FLASH_MODEL: &str = "gemini-3-flash-preview";

/// Default HTTP client timeout in seconds. Grounded searches are slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Process-wide configuration for the gateway and the query adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// API key for the gateway. `None` degrades every adapter to its fallback.
    pub api_key: Option<String>,

    /// Base URL of the gateway REST API, without a trailing slash.
    pub base_url: String,

    /// Model identifier used by the free-text analysis adapter.
    pub analysis_model: String,

    /// Model identifier used by the macro, news, calendar and company adapters.
    pub flash_model: String,

    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
            flash_model: DEFAULT_FLASH_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// - `API_KEY`, falling back to `GEMINI_API_KEY`
    /// - `MARKET_BRIEF_BASE_URL`
    /// - `MARKET_BRIEF_ANALYSIS_MODEL`
    /// - `MARKET_BRIEF_FLASH_MODEL`
    ///
    /// Unset or blank variables keep their defaults. A missing key is not an
    /// error here; it surfaces later as `CoreError::MissingCredential`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Self::default();
        settings.api_key = get("API_KEY").or_else(|| get("GEMINI_API_KEY"));
        if let Some(url) = get("MARKET_BRIEF_BASE_URL") {
            settings.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = get("MARKET_BRIEF_ANALYSIS_MODEL") {
            settings.analysis_model = model;
        }
        if let Some(model) = get("MARKET_BRIEF_FLASH_MODEL") {
            settings.flash_model = model;
        }
        settings
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Whether a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }
}
