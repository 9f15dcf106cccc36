use async_trait::async_trait;

use crate::errors::CoreError;
use super::request::{GenerateRequest, GenerateResponse};

/// Trait abstraction for the remote inference service.
///
/// The query adapters only ever see this trait. Swapping the vendor, or
/// scripting responses in tests, means providing another implementation;
/// prompt shaping and parsing stay untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Gateway: Send + Sync {
    /// Human-readable name of this gateway (for logs/errors).
    fn name(&self) -> &str;

    /// Run one completion. Exactly one remote call per invocation; no retries.
    ///
    /// Fails with `MissingCredential` when no key is configured, `Network` or
    /// `Api` on transport problems. Payload validation is the caller's job.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, CoreError>;
}
