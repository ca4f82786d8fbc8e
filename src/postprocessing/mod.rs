//! Final polish of the backend response before it reaches the user.

pub mod formatter;
pub mod validator;

#[cfg(test)]
mod tests;

pub use formatter::{clean, display_lines, strip_echo};
pub use validator::{validate, RejectedOutput};

/// Strip the echoed prompt, trim, and enforce the minimum length.
pub fn normalize(raw: &str, prompt: &str, min_chars: usize) -> Result<String, RejectedOutput> {
    let cleaned = clean(raw, prompt);
    validate(&cleaned, min_chars)?;
    Ok(cleaned)
}
