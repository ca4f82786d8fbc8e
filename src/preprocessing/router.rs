use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Explain,
    Simplify,
    Examples,
    Quiz,
}

/// What the user picked in the mode selector: one mode, or every mode in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelection {
    Single(Mode),
    All,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Explain, Mode::Simplify, Mode::Examples, Mode::Quiz];

    /// Resolves a mode name. Unknown names fall back to `Explain`.
    pub fn select_mode(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "explain" => Mode::Explain,
            "simplify" => Mode::Simplify,
            "examples" => Mode::Examples,
            "quiz" => Mode::Quiz,
            other => {
                warn!(mode = other, "Unknown mode, using explain");
                Mode::Explain
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Explain => "Explain",
            Mode::Simplify => "Simplify",
            Mode::Examples => "Examples",
            Mode::Quiz => "Quiz",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ModeSelection {
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("all") {
            ModeSelection::All
        } else {
            ModeSelection::Single(Mode::select_mode(name))
        }
    }

    pub fn modes(&self) -> Vec<Mode> {
        match self {
            ModeSelection::Single(mode) => vec![*mode],
            ModeSelection::All => Mode::ALL.to_vec(),
        }
    }
}

impl Default for ModeSelection {
    fn default() -> Self {
        ModeSelection::Single(Mode::Explain)
    }
}
