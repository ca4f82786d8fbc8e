//! Re-usable prompt skeletons and the static study sheets used when no
//! backend answers.

use crate::preprocessing::Mode;

/// Prompt skeleton and generation budget for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTemplate {
    pub prompt: &'static str,
    pub max_tokens: u32,
}

const TOPIC: &str = "{topic}";

pub fn mode_template(mode: Mode) -> ModeTemplate {
    match mode {
        Mode::Explain => ModeTemplate {
            prompt: "Explain the concept of {topic} clearly:\n",
            max_tokens: 150,
        },
        Mode::Simplify => ModeTemplate {
            prompt: "Explain {topic} in simple words:\n",
            max_tokens: 100,
        },
        Mode::Examples => ModeTemplate {
            prompt: "Give 3 real-world examples of {topic}:\n",
            max_tokens: 120,
        },
        Mode::Quiz => ModeTemplate {
            prompt: "Create 3 quiz questions with answers about {topic}:\n",
            max_tokens: 100,
        },
    }
}

/// Substitutes the topic verbatim. No escaping: topics are display text.
pub fn render(template: &str, topic: &str) -> String {
    template.replace(TOPIC, topic)
}

pub fn fallback_template(mode: Mode) -> &'static str {
    match mode {
        Mode::Explain => {
            "{topic} is a subject worth understanding from its foundations.\n\
             Start with the core definition of {topic} and the problem it addresses.\n\
             Identify the key terms and how they relate to each other.\n\
             Look at how {topic} developed and why it matters today."
        }
        Mode::Simplify => {
            "In simple words, {topic} is an idea you can break into small pieces.\n\
             Ask what {topic} does, who uses it and why.\n\
             Try explaining {topic} to a friend in one sentence."
        }
        Mode::Examples => {
            "Example 1: Find where {topic} shows up in everyday life.\n\
             Example 2: Look for {topic} in the news or in a textbook case study.\n\
             Example 3: Think of a problem at work or school that {topic} helps solve."
        }
        Mode::Quiz => {
            "Q1: What is {topic}? A: Write a one-sentence definition in your own words.\n\
             Q2: Why is {topic} important? A: Name one problem it helps solve.\n\
             Q3: Where can you see {topic} in practice? A: Give one real-world case."
        }
    }
}

/// Deterministic study sheet keyed only by (topic, mode).
pub fn fallback_content(topic: &str, mode: Mode) -> String {
    render(fallback_template(mode), topic)
}
