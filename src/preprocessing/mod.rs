pub mod router;
pub mod cleaner;

pub use router::{Mode, ModeSelection};
pub use cleaner::{Cleaner, CleanerError};

/// Topics and modes resolved from one submission of the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyPlan {
    pub topics: Vec<String>,
    pub modes: Vec<Mode>,
}

impl StudyPlan {
    /// Every (topic, mode) pair in processing order: topic-major, modes in
    /// selection order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Mode)> + '_ {
        self.topics
            .iter()
            .flat_map(move |topic| self.modes.iter().map(move |mode| (topic.as_str(), *mode)))
    }

    pub fn len(&self) -> usize {
        self.topics.len() * self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Preprocessor;

impl Preprocessor {
    pub fn process(input: &str, selection: ModeSelection) -> Result<StudyPlan, CleanerError> {
        let topics = Cleaner::split_topics(input)?;
        Ok(StudyPlan {
            topics,
            modes: selection.modes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_pairs_are_topic_major() {
        let plan = Preprocessor::process("Cells, Atoms", ModeSelection::All).unwrap();
        assert_eq!(plan.len(), 8);

        let pairs: Vec<_> = plan.pairs().collect();
        assert_eq!(pairs[0], ("Cells", Mode::Explain));
        assert_eq!(pairs[3], ("Cells", Mode::Quiz));
        assert_eq!(pairs[4], ("Atoms", Mode::Explain));
    }

    #[test]
    fn empty_input_never_builds_a_plan() {
        let err = Preprocessor::process("\n", ModeSelection::All).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid topic.");
    }
}
