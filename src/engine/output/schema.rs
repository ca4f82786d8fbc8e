//! Data model for prompts and generated study content.

use crate::preprocessing::Mode;
use serde::Serialize;

/// A provider-ready prompt. Derived only from (topic, mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSpec {
    pub topic: String,
    pub mode: Mode,
    pub text: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "backend", rename_all = "snake_case")]
pub enum ResultSource {
    /// Accepted output from the named backend.
    Backend(String),
    /// Static content, no backend produced usable text.
    Fallback,
    /// A backend rejected our credentials; `text` explains the problem.
    ConfigurationError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub text: String,
    pub source: ResultSource,
}

impl GenerationResult {
    pub fn from_backend(name: &str, text: String) -> Self {
        Self {
            text,
            source: ResultSource::Backend(name.to_string()),
        }
    }

    pub fn fallback(text: String) -> Self {
        Self {
            text,
            source: ResultSource::Fallback,
        }
    }

    pub fn configuration_error(text: String) -> Self {
        Self {
            text,
            source: ResultSource::ConfigurationError,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self.source, ResultSource::ConfigurationError)
    }
}
