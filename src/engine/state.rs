use super::history::{History, UserAnswer};
use crate::form::Question;

/// Where a traversal stands after an engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStatus {
    /// No engine call has produced this state yet.
    NotStarted,
    /// Positioned at a question that awaits an answer.
    AtQuestion(i32),
    /// Positioned at a terminal question. The flow is complete.
    AtEnd(i32),
    /// The requested question could not be resolved in the current graph.
    Unavailable { question_id: i32 },
}

/// Everything the presentation layer needs to render one turn and to make
/// the next call.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalState {
    pub status: FlowStatus,
    /// The question to render. `None` when the state is degraded.
    pub current_question: Option<Question>,
    /// Answers and visiting order, to be handed back on the next call.
    pub history: History,
    /// The answer already recorded for the current question's text, used to
    /// pre-fill the input.
    pub previous_answer: Option<String>,
}

impl Default for TraversalState {
    fn default() -> Self {
        Self {
            status: FlowStatus::NotStarted,
            current_question: None,
            history: History::new(),
            previous_answer: None,
        }
    }
}

impl TraversalState {
    pub(crate) fn at(question: &Question, history: History) -> Self {
        let previous_answer = history.answer_for(&question.text).map(str::to_string);
        let status = if question.is_terminal() {
            FlowStatus::AtEnd(question.id)
        } else {
            FlowStatus::AtQuestion(question.id)
        };

        Self {
            status,
            current_question: Some(question.clone()),
            history,
            previous_answer,
        }
    }

    pub(crate) fn unavailable(question_id: i32, history: History) -> Self {
        Self {
            status: FlowStatus::Unavailable { question_id },
            current_question: None,
            history,
            previous_answer: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, FlowStatus::AtEnd(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.status, FlowStatus::Unavailable { .. })
    }

    pub fn user_answers(&self) -> &[UserAnswer] {
        &self.history.user_answers
    }

    pub fn question_order(&self) -> &[i32] {
        &self.history.question_order
    }
}
