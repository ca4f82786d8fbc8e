//! # Generation backends
//!
//! HTTP clients for the text-generation services StudyMate can fall back across:
//! - `inference`: Hugging Face style `{"inputs": ...}` endpoints
//! - `chat`: chat-completion endpoints
//!
//! ## Architecture
//!
//! ```text
//! Config → build_backends → Vec<Box<dyn Backend>> → GenerationOrchestrator
//! ```
//!
//! Backends are built once, explicitly, and handed to the orchestrator. Each
//! one owns its HTTP client, timeout and credential.

pub mod chat;
pub mod credential;
pub mod inference;
pub mod send;

pub use chat::ChatBackend;
pub use credential::{ApiKey, Credential};
pub use inference::InferenceBackend;

use crate::config::{BackendKind, Config, ConfigError};
use crate::engine::Backend;
use tracing::{info, warn};

/// Builds the ordered backend chain described by `config`.
///
/// A backend whose key variable is unset is still built; it reports an auth
/// error on first use instead of sending an unauthenticated request.
pub fn build_backends(config: &Config) -> Result<Vec<Box<dyn Backend>>, ConfigError> {
    config.validate()?;

    let mut backends: Vec<Box<dyn Backend>> = Vec::with_capacity(config.backends.len());
    for backend_config in &config.backends {
        let name = backend_config.display_name();
        let client = send::build_client(backend_config.timeout()).map_err(|e| ConfigError::HttpClient {
            backend: name.clone(),
            reason: e.to_string(),
        })?;

        let credential = Credential::resolve(backend_config.api_key_env.as_deref());
        if let Credential::Missing { var } = &credential {
            warn!(backend = %name, var = %var, "API key variable is not set");
        }

        let backend: Box<dyn Backend> = match backend_config.kind {
            BackendKind::Inference => Box::new(InferenceBackend::from_config(backend_config, client, credential)),
            BackendKind::Chat => Box::new(ChatBackend::from_config(backend_config, client, credential)),
        };
        info!(backend = %name, kind = ?backend_config.kind, timeout_secs = backend_config.timeout_secs, "Backend configured");
        backends.push(backend);
    }

    Ok(backends)
}
