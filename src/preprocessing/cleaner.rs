use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static TOPIC_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\r\n]+").expect("separator pattern is valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CleanerError {
    #[error("Please enter a valid topic.")]
    EmptyInput,
}

pub struct Cleaner;

impl Cleaner {
    /// Splits raw topic input on commas and line breaks.
    ///
    /// Order is preserved and repeated topics are kept; each one is studied
    /// on its own. There is no cap on the number of topics.
    pub fn split_topics(input: &str) -> Result<Vec<String>, CleanerError> {
        let topics: Vec<String> = TOPIC_SEPARATORS
            .split(input)
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .map(str::to_string)
            .collect();

        if topics.is_empty() {
            return Err(CleanerError::EmptyInput);
        }

        Ok(topics)
    }

    /// Single-topic guard used before a prompt is built.
    pub fn clean_topic(topic: &str) -> Result<&str, CleanerError> {
        let trimmed = topic.trim();
        if trimmed.is_empty() {
            return Err(CleanerError::EmptyInput);
        }
        Ok(trimmed)
    }
}
