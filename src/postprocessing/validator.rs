//! Acceptance checks on cleaned output.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RejectedOutput {
    #[error("output too short: {length} < {minimum} characters")]
    TooShort { length: usize, minimum: usize },
}

/// Near-empty completions are treated as a failed backend call.
pub fn validate(text: &str, min_chars: usize) -> Result<&str, RejectedOutput> {
    let length = text.chars().count();
    if length < min_chars {
        return Err(RejectedOutput::TooShort {
            length,
            minimum: min_chars,
        });
    }
    Ok(text)
}
