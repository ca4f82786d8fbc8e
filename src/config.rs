//! Runtime configuration: backend chain, output thresholds and the session log.
//!
//! Configuration is read from a TOML file when one is given (or named by
//! `STUDYMATE_CONFIG`), otherwise the defaults below apply. Credentials never
//! live in the file; each backend names the environment variable holding its
//! key.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const CONFIG_ENV_VAR: &str = "STUDYMATE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },

    #[error("Failed to create HTTP client for backend '{backend}': {reason}")]
    HttpClient { backend: String, reason: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Text-generation endpoint taking `{"inputs": ...}` (Hugging Face style).
    Inference,
    /// Chat-completion endpoint taking `{"model", "messages"}`.
    Chat,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub kind: BackendKind,
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.7
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub min_output_chars: usize,
    pub pause_between_calls_ms: u64,
    pub session_log: Option<PathBuf>,
    pub backends: Vec<BackendConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_output_chars: crate::engine::DEFAULT_MIN_OUTPUT_CHARS,
            pause_between_calls_ms: 500,
            session_log: None,
            backends: vec![BackendConfig::default()],
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::Inference,
            name: Some("distilgpt2".to_string()),
            url: "https://api-inference.huggingface.co/models/distilgpt2".to_string(),
            model: None,
            api_key_env: Some("HF_TOKEN".to_string()),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            system_prompt: None,
        }
    }
}

impl BackendConfig {
    /// Configured name, else the model, else the endpoint host.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(model) = &self.model {
            return model.clone();
        }
        Url::parse(&self.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| self.url.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let name = self.display_name();
        let invalid = |reason: String| ConfigError::Invalid {
            reason: format!("backend '{}': {}", name, reason),
        };

        let url = Url::parse(&self.url).map_err(|e| invalid(format!("bad url '{}': {}", self.url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported url scheme '{}'", url.scheme())));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs must be greater than zero".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid(format!("temperature {} outside 0.0..=2.0", self.temperature)));
        }
        if self.kind == BackendKind::Chat && self.model.as_deref().map_or(true, str::is_empty) {
            return Err(invalid("chat backends need a model".to_string()));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), backends = config.backends.len(), "Configuration loaded");
        Ok(config)
    }

    /// Explicit path first, then `STUDYMATE_CONFIG`, then defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // 0 would accept empty and echo-only completions
        if self.min_output_chars == 0 {
            return Err(ConfigError::Invalid {
                reason: "min_output_chars must be at least 1".to_string(),
            });
        }
        for backend in &self.backends {
            backend.validate()?;
        }
        Ok(())
    }

    pub fn pause_between_calls(&self) -> Duration {
        Duration::from_millis(self.pause_between_calls_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_output_chars, 20);
        assert_eq!(config.backends.len(), 1);
        assert_eq!(config.backends[0].api_key_env.as_deref(), Some("HF_TOKEN"));
    }

    #[test]
    fn parses_backend_chain_in_order() {
        let config = Config::from_toml_str(
            r#"
            min_output_chars = 40
            pause_between_calls_ms = 300
            session_log = "studymate_output.txt"

            [[backends]]
            kind = "inference"
            url = "https://api-inference.huggingface.co/models/google/flan-t5-large"
            api_key_env = "HF_TOKEN"
            timeout_secs = 10

            [[backends]]
            kind = "chat"
            name = "openai"
            url = "https://api.openai.com/v1/chat/completions"
            model = "gpt-4o-mini"
            api_key_env = "OPENAI_API_KEY"
            temperature = 0.9
            "#,
        )
        .unwrap();

        assert_eq!(config.min_output_chars, 40);
        assert_eq!(config.pause_between_calls(), Duration::from_millis(300));
        assert_eq!(config.session_log, Some(PathBuf::from("studymate_output.txt")));
        assert_eq!(config.backends[0].kind, BackendKind::Inference);
        assert_eq!(config.backends[0].display_name(), "api-inference.huggingface.co");
        assert_eq!(config.backends[0].timeout(), Duration::from_secs(10));
        assert_eq!(config.backends[1].display_name(), "openai");
        assert_eq!(config.backends[1].timeout_secs, 30);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = Config::from_toml_str("min_output_chars = 60").unwrap();
        assert_eq!(config.min_output_chars, 60);
        assert_eq!(config.pause_between_calls_ms, 500);
        assert_eq!(config.backends, vec![BackendConfig::default()]);
    }

    #[test]
    fn chat_backend_without_model_is_rejected() {
        let err = Config::from_toml_str(
            r#"
            [[backends]]
            kind = "chat"
            url = "https://api.openai.com/v1/chat/completions"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn bad_urls_and_timeouts_are_rejected() {
        let bad_scheme = r#"
            [[backends]]
            kind = "inference"
            url = "ftp://example.com/model"
        "#;
        assert!(Config::from_toml_str(bad_scheme).is_err());

        let zero_timeout = r#"
            [[backends]]
            kind = "inference"
            url = "http://localhost:8080/generate"
            timeout_secs = 0
        "#;
        assert!(Config::from_toml_str(zero_timeout).is_err());
    }

    #[test]
    fn zero_minimum_output_length_is_rejected() {
        let err = Config::from_toml_str("min_output_chars = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("min_output_chars"));

        let config = Config {
            min_output_chars: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::from_toml_str("min_output_chars = 1").is_ok());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
