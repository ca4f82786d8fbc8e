//! Cleans and trims the raw LLM response.

/// Removes the prompt when the provider echoed it in front of the completion.
pub fn strip_echo<'a>(raw: &'a str, prompt: &str) -> &'a str {
    raw.strip_prefix(prompt).unwrap_or(raw)
}

pub fn clean(raw: &str, prompt: &str) -> String {
    strip_echo(raw, prompt).trim().to_string()
}

/// Splits display text into trimmed, non-empty lines for numbered rendering.
pub fn display_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
