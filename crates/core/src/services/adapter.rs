use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

use crate::errors::{CoreError, Fallback};
use crate::gateway::request::GenerateRequest;
use crate::gateway::traits::Gateway;

/// One application use case translated into a single gateway call.
///
/// Implementors supply request shaping, response parsing and a fallback
/// value; the provided [`execute`](Self::execute) wires them together and
/// guarantees that nothing fails past this boundary: every error becomes a
/// [`Fallback`] carrying the substitute value and the cause.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QueryAdapter: Send + Sync {
    /// Adapter input. `()` for the context-free use cases, `str` for queries.
    type Input: ?Sized + Sync;
    type Output: Send;

    /// Short use-case label for logs (`"news"`, `"analysis"`, ...).
    fn use_case(&self) -> &'static str;

    fn gateway(&self) -> &dyn Gateway;

    fn build_request(&self, input: &Self::Input) -> Result<GenerateRequest, CoreError>;

    fn parse(&self, text: &str) -> Result<Self::Output, CoreError>;

    fn fallback(&self) -> Self::Output;

    /// Build, send and parse without the fallback substitution.
    async fn try_execute(&self, input: &Self::Input) -> Result<Self::Output, CoreError> {
        let request = self.build_request(input)?;
        let response = self.gateway().generate(&request).await?;
        self.parse(&response.text)
    }

    /// Run the use case once. No retries.
    async fn execute(
        &self,
        input: &Self::Input,
    ) -> Result<Self::Output, Fallback<Self::Output>> {
        match self.try_execute(input).await {
            Ok(output) => Ok(output),
            Err(cause) => {
                tracing::warn!(
                    use_case = self.use_case(),
                    gateway = self.gateway().name(),
                    kind = %cause.kind(),
                    error = %cause,
                    "query adapter fell back"
                );
                Err(Fallback::new(self.fallback(), cause))
            }
        }
    }
}

/// Reject empty or whitespace-only queries; returns the trimmed query.
pub(crate) fn require_query(query: &str) -> Result<&str, CoreError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CoreError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}

/// Locate the JSON document inside a model answer.
///
/// Search-grounded answers sometimes wrap the payload in a Markdown code
/// fence (```` ```json ... ``` ````), possibly with prose before or after
/// it. The contents of the first fenced block are returned; without a fence
/// the whole answer is returned trimmed and left to the JSON parser to judge.
pub(crate) fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    let rest = &trimmed[open + 3..];
    // Skip the info string ("json", "JSON", or nothing) up to the first newline.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    match body.find("```") {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

/// Parse a structured payload as a JSON array of `T`.
///
/// Any item that violates the shape of `T` (missing field, wrong type,
/// unknown enum value) rejects the whole batch.
pub(crate) fn parse_json_list<T: DeserializeOwned>(
    use_case: &str,
    text: &str,
) -> Result<Vec<T>, CoreError> {
    let payload = extract_json(text);
    if payload.is_empty() {
        return Err(CoreError::malformed(use_case, "empty payload"));
    }
    serde_json::from_str::<Vec<T>>(payload)
        .map_err(|e| CoreError::malformed(use_case, e.to_string()))
}

/// Keep the first item for each key, preserving order.
pub(crate) fn dedup_by_key<T, F>(use_case: &str, items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut seen = HashSet::new();
    let before = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect();
    if kept.len() != before {
        tracing::debug!(
            use_case,
            dropped = before - kept.len(),
            "dropped duplicate items from batch"
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_plain() {
        assert_eq!(extract_json("  [1,2] \n"), "[1,2]");
    }

    #[test]
    fn extract_json_fenced_with_language() {
        assert_eq!(extract_json("```json\n[{\"a\":1}]\n```"), "[{\"a\":1}]");
    }

    #[test]
    fn extract_json_fenced_without_language() {
        assert_eq!(extract_json("```\n[]\n```"), "[]");
    }

    #[test]
    fn extract_json_unterminated_fence() {
        assert_eq!(extract_json("```json\n[1]"), "[1]");
    }

    #[test]
    fn extract_json_fence_with_trailing_sources() {
        let text = "```json\n[{\"a\":1}]\n```\n출처: Reuters";
        assert_eq!(extract_json(text), "[{\"a\":1}]");
    }

    #[test]
    fn extract_json_fence_after_leading_prose() {
        let text = "다음은 결과입니다.\n```json\n[2]\n```\n끝.";
        assert_eq!(extract_json(text), "[2]");
    }

    #[test]
    fn require_query_trims() {
        assert_eq!(require_query("  nvda ").unwrap(), "nvda");
        assert!(matches!(require_query(" \t"), Err(CoreError::EmptyQuery)));
    }

    #[test]
    fn parse_json_list_rejects_object() {
        let err = parse_json_list::<String>("test", "{\"a\":1}").unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse { .. }));
    }

    #[test]
    fn parse_json_list_rejects_empty() {
        let err = parse_json_list::<String>("test", "   ").unwrap_err();
        assert!(err.to_string().contains("empty payload"));
    }

    #[test]
    fn dedup_keeps_first() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let kept = dedup_by_key("test", items, |(k, _)| k.to_string());
        assert_eq!(kept, vec![("a", 1), ("b", 2)]);
    }
}
