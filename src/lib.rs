//! StudyMate: explain, simplify, illustrate or quiz any topic.
//!
//! ```text
//! raw topics → preprocessing → PromptBuilder → GenerationOrchestrator → text
//!                                                 └─ backend chain (llm) ─┘
//! ```

pub mod commands;
pub mod config;
pub mod engine;
pub mod llm;
pub mod postprocessing;
pub mod preprocessing;
pub mod session_log;

pub use commands::{generate_study_material, CommandError, StudyEntry, StudyEvent, StudyRequest};
pub use config::{Config, ConfigError};
pub use engine::{Backend, BackendError, GenerationOrchestrator, GenerationResult, PromptBuilder, PromptSpec, ResultSource};
pub use preprocessing::{Mode, ModeSelection};

/// Wires configuration into a ready orchestrator.
pub fn orchestrator_from_config(config: &Config) -> Result<GenerationOrchestrator, ConfigError> {
    let backends = llm::build_backends(config)?;
    Ok(GenerationOrchestrator::new(backends, config.min_output_chars))
}
