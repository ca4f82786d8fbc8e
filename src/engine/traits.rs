//! Shared traits.

use crate::engine::types::BackendError;
use std::time::Duration;

pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

/// A text-generation capability the orchestrator can fall back across.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Short identifier used in logs and in [`crate::engine::ResultSource`].
    fn name(&self) -> &str;

    /// Upper bound on a single `complete` call.
    fn timeout(&self) -> Duration {
        DEFAULT_BACKEND_TIMEOUT
    }

    /// Returns the raw provider text, which may still contain the prompt.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, BackendError>;
}
