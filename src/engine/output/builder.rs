//! Turns a (topic, mode) pair into a provider-ready prompt.

use super::{
    schema::PromptSpec,
    templates::{mode_template, render},
};
use crate::preprocessing::Mode;

/// Stateless prompt factory. Safe to share across tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the prompt for one topic in one mode.
    ///
    /// Callers are expected to have rejected blank topics already (see
    /// [`crate::preprocessing::Cleaner::clean_topic`]).
    pub fn build(&self, topic: &str, mode: Mode) -> PromptSpec {
        let template = mode_template(mode);
        PromptSpec {
            topic: topic.to_string(),
            mode,
            text: render(template.prompt, topic),
            max_tokens: template.max_tokens,
        }
    }
}
