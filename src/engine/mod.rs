//! Public façade for the engine layer.

pub mod orchestrator;
pub mod output;
pub mod traits;
pub mod types;


pub use orchestrator::{GenerationOrchestrator, DEFAULT_MIN_OUTPUT_CHARS};
pub use output::{GenerationResult, PromptBuilder, PromptSpec, ResultSource};
pub use traits::{Backend, DEFAULT_BACKEND_TIMEOUT};
pub use types::{AttemptError, BackendError};
