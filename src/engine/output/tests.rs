use super::*;
use crate::preprocessing::Mode;

#[test]
fn prompt_contains_topic_and_budget() {
    let builder = PromptBuilder::new();
    let expected = [
        (Mode::Explain, 150),
        (Mode::Simplify, 100),
        (Mode::Examples, 120),
        (Mode::Quiz, 100),
    ];

    for topic in ["Photosynthesis", "Quantum Physics", "C++ <templates> & \"traits\""] {
        for (mode, budget) in expected {
            let spec = builder.build(topic, mode);
            assert!(spec.text.contains(topic), "{mode}: {}", spec.text);
            assert_eq!(spec.max_tokens, budget);
            assert_eq!(spec.mode, mode);
            assert_eq!(spec.topic, topic);
        }
    }
}

#[test]
fn explain_prompt_matches_template() {
    let spec = PromptBuilder::new().build("Gravity", Mode::Explain);
    assert_eq!(spec.text, "Explain the concept of Gravity clearly:\n");

    let spec = PromptBuilder::new().build("Gravity", Mode::Quiz);
    assert_eq!(spec.text, "Create 3 quiz questions with answers about Gravity:\n");
}

#[test]
fn build_is_pure() {
    let builder = PromptBuilder::new();
    assert_eq!(
        builder.build("Osmosis", Mode::Examples),
        builder.build("Osmosis", Mode::Examples)
    );
}

#[test]
fn fallback_is_deterministic_and_multiline() {
    for mode in Mode::ALL {
        let first = fallback_content("Mitosis", mode);
        assert_eq!(first, fallback_content("Mitosis", mode));
        assert!(first.contains("Mitosis"));
        assert!(!first.contains("{topic}"));
        assert!(first.lines().count() >= 3);
    }
    assert_ne!(
        fallback_content("Mitosis", Mode::Quiz),
        fallback_content("Meiosis", Mode::Quiz)
    );
}
