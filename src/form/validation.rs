use super::definition::{ENTRY_QUESTION_ID, Form};
use ahash::AHashSet;
use itertools::Itertools;
use thiserror::Error;

/// A structural problem found in a form definition.
///
/// Issues are advisory: the traversal engine copes with every one of them at
/// runtime by degrading to an unavailable state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    #[error("Form has no questions")]
    NoQuestions,

    #[error("Form has no entry question with id 0")]
    MissingEntry,

    #[error("Question id {0} is used more than once")]
    DuplicateId(i32),

    #[error("Option '{option}' on question {question_id} routes to missing question {destination}")]
    DanglingDestination {
        question_id: i32,
        option: String,
        destination: i32,
    },

    #[error("Question {0} is a '{1}' question but offers no options")]
    ChoiceWithoutOptions(i32, String),

    #[error("Form has no terminal question")]
    NoTerminal,
}

/// Question types whose answer is picked from the option list.
const CHOICE_TYPES: &[&str] = &["radio", "select", "dropdown", "choice", "multiple-choice"];

impl Form {
    /// Checks the form for structural issues, in document order.
    pub fn validate(&self) -> Vec<FormIssue> {
        if self.questions.is_empty() {
            return vec![FormIssue::NoQuestions];
        }

        let mut issues = Vec::new();
        let ids: AHashSet<i32> = self.questions.iter().map(|q| q.id).collect();

        if !ids.contains(&ENTRY_QUESTION_ID) {
            issues.push(FormIssue::MissingEntry);
        }

        issues.extend(
            self.questions
                .iter()
                .map(|q| q.id)
                .duplicates()
                .map(FormIssue::DuplicateId),
        );

        for question in &self.questions {
            let kind = question.kind.to_lowercase();
            if CHOICE_TYPES.contains(&kind.as_str()) && question.options.is_empty() {
                issues.push(FormIssue::ChoiceWithoutOptions(
                    question.id,
                    question.kind.clone(),
                ));
            }

            for option in &question.options {
                if let Some(destination) = option.destination {
                    if !ids.contains(&destination) {
                        issues.push(FormIssue::DanglingDestination {
                            question_id: question.id,
                            option: option.text.clone(),
                            destination,
                        });
                    }
                }
            }
        }

        if !self.questions.iter().any(|q| q.is_terminal()) {
            issues.push(FormIssue::NoTerminal);
        }

        issues
    }
}
