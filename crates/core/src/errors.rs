use thiserror::Error;

/// Unified error type for the entire market-brief-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Gateway ─────────────────────────────────────────────────────
    #[error("No API key configured for the inference gateway")]
    MissingCredential,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Malformed {use_case} response: {message}")]
    MalformedResponse {
        use_case: String,
        message: String,
    },

    // ── Input ───────────────────────────────────────────────────────
    #[error("Query must not be empty")]
    EmptyQuery,

    // ── Storage ─────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Coarse classification of a [`CoreError`], used as a structured log field.
///
/// All gateway-side kinds collapse to the same visible behavior (a fallback
/// value) but stay distinguishable in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MissingCredential,
    TransportFailure,
    MalformedResponse,
    InvalidInput,
    Storage,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::MissingCredential => write!(f, "missing_credential"),
            FailureKind::TransportFailure => write!(f, "transport_failure"),
            FailureKind::MalformedResponse => write!(f, "malformed_response"),
            FailureKind::InvalidInput => write!(f, "invalid_input"),
            FailureKind::Storage => write!(f, "storage"),
        }
    }
}

impl CoreError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CoreError::MissingCredential => FailureKind::MissingCredential,
            CoreError::Network(_) | CoreError::Api { .. } => FailureKind::TransportFailure,
            CoreError::MalformedResponse { .. } => FailureKind::MalformedResponse,
            CoreError::EmptyQuery => FailureKind::InvalidInput,
            CoreError::FileIO(_) | CoreError::Serialization(_) | CoreError::Deserialization(_) => {
                FailureKind::Storage
            }
        }
    }

    pub(crate) fn malformed(use_case: &str, message: impl Into<String>) -> Self {
        CoreError::MalformedResponse {
            use_case: use_case.to_string(),
            message: message.into(),
        }
    }
}

/// The error side of every query adapter: a safe substitute value together
/// with the failure that forced it.
#[derive(Debug)]
pub struct Fallback<T> {
    pub value: T,
    pub cause: CoreError,
}

impl<T> Fallback<T> {
    pub fn new(value: T, cause: CoreError) -> Self {
        Self { value, cause }
    }

    pub fn kind(&self) -> FailureKind {
        self.cause.kind()
    }

    /// Discard the cause and keep the substitute value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Collapse an adapter outcome to the value the view should render.
pub fn value_or_fallback<T>(outcome: Result<T, Fallback<T>>) -> T {
    match outcome {
        Ok(value) => value,
        Err(fallback) => fallback.into_value(),
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors often contain full URLs; strip the query string so a
        // key passed as `?key=` never reaches the logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
