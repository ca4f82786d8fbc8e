//! High-level coordinator: prompt → backend chain → post-processing → fallback.

use crate::{
    engine::{
        output::{fallback_content, GenerationResult, PromptSpec},
        traits::Backend,
        types::{AttemptError, BackendError},
    },
    postprocessing,
};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

pub const DEFAULT_MIN_OUTPUT_CHARS: usize = 20;

pub struct GenerationOrchestrator {
    backends: Vec<Box<dyn Backend>>,
    min_output_chars: usize,
}

impl GenerationOrchestrator {
    /// `backends` are tried in the given order on every call.
    pub fn new(backends: Vec<Box<dyn Backend>>, min_output_chars: usize) -> Self {
        Self {
            backends,
            min_output_chars,
        }
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    pub fn min_output_chars(&self) -> usize {
        self.min_output_chars
    }

    /// Produce display text for one prompt. Never fails: the worst case is
    /// the static study sheet for (topic, mode), or a configuration message
    /// when a backend rejected its credentials.
    #[instrument(
        skip_all,
        fields(request_id = %Uuid::new_v4(), topic = %prompt.topic, mode = %prompt.mode)
    )]
    pub async fn generate(&self, prompt: &PromptSpec) -> GenerationResult {
        let start = Instant::now();

        for (index, backend) in self.backends.iter().enumerate() {
            match self.attempt(backend.as_ref(), prompt).await {
                Ok(text) => {
                    info!(
                        backend = backend.name(),
                        attempt = index + 1,
                        chars = text.chars().count(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "Backend produced accepted output"
                    );
                    return GenerationResult::from_backend(backend.name(), text);
                }
                Err(AttemptError::Backend(e)) if e.is_terminal() => {
                    error!(backend = backend.name(), error = %e, "Backend credentials rejected");
                    return GenerationResult::configuration_error(format!(
                        "Configuration error for backend '{}': {}",
                        backend.name(),
                        e
                    ));
                }
                Err(e) => {
                    warn!(backend = backend.name(), attempt = index + 1, error = %e, "Backend failed, trying next");
                }
            }
        }

        warn!(
            attempts = self.backends.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "All backends exhausted, using static fallback"
        );
        GenerationResult::fallback(fallback_content(&prompt.topic, prompt.mode))
    }

    async fn attempt(&self, backend: &dyn Backend, prompt: &PromptSpec) -> Result<String, AttemptError> {
        let limit = backend.timeout();
        debug!(backend = backend.name(), timeout_ms = limit.as_millis() as u64, "Calling backend");

        let raw = tokio::time::timeout(limit, backend.complete(&prompt.text, prompt.max_tokens))
            .await
            .map_err(|_| BackendError::Timeout { after: limit })??;

        Ok(postprocessing::normalize(&raw, &prompt.text, self.min_output_chars)?)
    }
}
