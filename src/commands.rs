use crate::engine::{GenerationOrchestrator, GenerationResult, PromptBuilder};
use crate::preprocessing::{CleanerError, Mode, ModeSelection, Preprocessor};
use crate::session_log::{SessionLog, SessionLogError};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Input(#[from] CleanerError),
    #[error(transparent)]
    SessionLog(#[from] SessionLogError),
}

/// One submission of the input form.
#[derive(Debug, Clone)]
pub struct StudyRequest {
    pub raw_topics: String,
    pub selection: ModeSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyEntry {
    pub topic: String,
    pub mode: Mode,
    pub result: GenerationResult,
}

/// Progress notifications for the renderer, in processing order.
#[derive(Debug)]
pub enum StudyEvent<'a> {
    Topic(&'a str),
    Entry(&'a StudyEntry),
}

/* ---------- MAIN PIPELINE ---------- */

/// Runs every (topic, mode) pair through the prompt builder and the backend
/// chain, one call at a time.
///
/// `pause` is slept between consecutive calls as a courtesy to the remote
/// provider. Empty input is rejected before any backend is called.
#[instrument(skip_all, fields(selection = ?request.selection))]
pub async fn generate_study_material<F>(
    request: &StudyRequest,
    orchestrator: &GenerationOrchestrator,
    pause: Duration,
    mut log: Option<&mut SessionLog>,
    mut on_event: F,
) -> Result<Vec<StudyEntry>, CommandError>
where
    F: FnMut(StudyEvent<'_>),
{
    // 1. Split topics and expand the mode selection
    let plan = Preprocessor::process(&request.raw_topics, request.selection)?;
    info!(topics = plan.topics.len(), calls = plan.len(), "Study plan ready");

    let builder = PromptBuilder::new();
    let mut entries = Vec::with_capacity(plan.len());

    // 2. Sequential topic x mode loop
    for topic in &plan.topics {
        on_event(StudyEvent::Topic(topic));
        if let Some(log) = log.as_deref_mut() {
            log.record_topic(topic).await?;
        }

        for &mode in &plan.modes {
            if !entries.is_empty() && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }

            let prompt = builder.build(topic, mode);
            let result = orchestrator.generate(&prompt).await;

            if let Some(log) = log.as_deref_mut() {
                log.record_result(mode, &result.text).await?;
            }

            let entry = StudyEntry {
                topic: topic.clone(),
                mode,
                result,
            };
            on_event(StudyEvent::Entry(&entry));
            entries.push(entry);
        }
    }

    Ok(entries)
}
