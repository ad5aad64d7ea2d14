//! The question-flow traversal engine.
//!
//! [`FlowEngine`] is a small state machine over whatever question graph its
//! [`GraphHandle`] currently holds. It keeps no per-user state: every call
//! takes the caller's [`History`] and returns a fresh [`TraversalState`] whose
//! history the caller hands back on the next turn.
//!
//! Graph-shape problems (an id that no longer resolves, a form without an
//! entry question, an answer with nowhere to go) never fail a call. They
//! produce a [`FlowStatus::Unavailable`] state the caller can render.
use crate::error::AnswerError;
use crate::form::{ENTRY_QUESTION_ID, GraphHandle, QuestionGraph};
use tracing::{debug, warn};

mod history;
mod state;

pub use history::{History, UserAnswer};
pub use state::{FlowStatus, TraversalState};

/// An answer submitted through [`FlowEngine::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the option at this position in the question's option list.
    Choice(usize),
    /// Free text. On a question with options, the text must match an
    /// option label.
    Text(String),
    /// Move on without answering. Rejected on required questions.
    Skip,
}

/// Drives traversals over the graph held by a [`GraphHandle`].
#[derive(Debug, Clone, Default)]
pub struct FlowEngine {
    graph: GraphHandle,
}

impl FlowEngine {
    pub fn new(graph: GraphHandle) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &GraphHandle {
        &self.graph
    }

    /// Positions a new traversal at the entry question.
    ///
    /// A graph without an entry question yields an unavailable state with an
    /// empty history.
    pub fn start(&self) -> TraversalState {
        let graph = self.graph.snapshot();
        match graph.entry() {
            Some(entry) => TraversalState::at(entry, History::starting_at(ENTRY_QUESTION_ID)),
            None => {
                warn!("No entry question configured");
                TraversalState::unavailable(ENTRY_QUESTION_ID, History::new())
            }
        }
    }

    /// Discards all history. Equivalent to [`FlowEngine::start`].
    pub fn restart(&self) -> TraversalState {
        debug!("Restarting traversal");
        self.start()
    }

    /// Records an answer and moves to `question_id`.
    ///
    /// The answer is stored under `question_text` only when both it and
    /// `input` are non-empty; an existing record with the same text is
    /// overwritten. `question_id` is appended to the visiting order unless it
    /// was visited before. Routing is the caller's job here: `question_id` is
    /// the destination already chosen, see [`FlowEngine::submit`] for the
    /// variant that resolves it.
    pub fn advance(
        &self,
        history: History,
        question_id: i32,
        input: Option<&str>,
        question_text: Option<&str>,
    ) -> TraversalState {
        let graph = self.graph.snapshot();
        advance_on(&graph, history, question_id, input, question_text)
    }

    /// Returns to the previously visited question, keeping every answer.
    ///
    /// From the first question there is nowhere to go back to, and the
    /// traversal restarts.
    pub fn go_back(&self, mut history: History) -> TraversalState {
        let graph = self.graph.snapshot();
        match history.step_back() {
            Some(question_id) => match graph.find(question_id) {
                Some(question) => TraversalState::at(question, history),
                None => {
                    warn!(question_id, "Previous question no longer exists");
                    TraversalState::unavailable(question_id, history)
                }
            },
            None => {
                debug!("Already at the first question, restarting");
                self.start()
            }
        }
    }

    /// Validates an answer to `question_id`, resolves where it routes and
    /// advances there.
    ///
    /// A chosen option routes to its destination; free text, skips and
    /// options without a destination fall through to the next question in
    /// document order. The recorded value for a choice is the option label.
    pub fn submit(
        &self,
        mut history: History,
        question_id: i32,
        answer: Answer,
    ) -> Result<TraversalState, AnswerError> {
        let graph = self.graph.snapshot();
        let Some(question) = graph.find(question_id) else {
            warn!(question_id, "Answered question does not exist");
            return Ok(TraversalState::unavailable(question_id, history));
        };

        if question.is_terminal() {
            history.visit(question_id);
            return Ok(TraversalState::at(question, history));
        }

        let (value, destination) = match answer {
            Answer::Choice(index) => {
                let option =
                    question
                        .options
                        .get(index)
                        .ok_or_else(|| AnswerError::InvalidOption {
                            question_id,
                            choice: index.to_string(),
                        })?;
                (Some(option.text.clone()), option.destination)
            }
            Answer::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    if question.required {
                        return Err(AnswerError::Required { question_id });
                    }
                    (None, None)
                } else if question.options.is_empty() {
                    (Some(text.to_string()), None)
                } else {
                    let option =
                        question
                            .option_by_text(text)
                            .ok_or_else(|| AnswerError::InvalidOption {
                                question_id,
                                choice: text.to_string(),
                            })?;
                    (Some(option.text.clone()), option.destination)
                }
            }
            Answer::Skip => {
                if question.required {
                    return Err(AnswerError::Required { question_id });
                }
                (None, None)
            }
        };

        let next = destination.or_else(|| graph.next_in_order(question_id).map(|q| q.id));
        match next {
            Some(next_id) => Ok(advance_on(
                &graph,
                history,
                next_id,
                value.as_deref(),
                Some(&question.text),
            )),
            None => {
                if let Some(value) = value.as_deref() {
                    history.upsert_answer(&question.text, value);
                }
                warn!(question_id, "Answer has no route to a next question");
                Ok(TraversalState::unavailable(question_id, history))
            }
        }
    }

    /// Decodes a caller-held history token. A missing or malformed token, or
    /// one that has visited no question, yields `None`, meaning the traversal
    /// must restart.
    pub fn resume(token: Option<&str>) -> Option<History> {
        let token = token.filter(|t| !t.trim().is_empty())?;
        match History::decode(token) {
            Ok(history) if history.question_order.is_empty() => {
                warn!("Discarding history token with no visited questions");
                None
            }
            Ok(history) => Some(history),
            Err(e) => {
                warn!(error = %e, "Discarding unusable history token");
                None
            }
        }
    }

    /// [`FlowEngine::advance`] on a serialized history. Restarts when the
    /// token is missing or malformed.
    pub fn advance_token(
        &self,
        token: Option<&str>,
        question_id: i32,
        input: Option<&str>,
        question_text: Option<&str>,
    ) -> TraversalState {
        match Self::resume(token) {
            Some(history) => self.advance(history, question_id, input, question_text),
            None => self.start(),
        }
    }

    /// [`FlowEngine::go_back`] on a serialized history. Restarts when the
    /// token is missing or malformed.
    pub fn go_back_token(&self, token: Option<&str>) -> TraversalState {
        match Self::resume(token) {
            Some(history) => self.go_back(history),
            None => self.start(),
        }
    }
}

fn advance_on(
    graph: &QuestionGraph,
    mut history: History,
    question_id: i32,
    input: Option<&str>,
    question_text: Option<&str>,
) -> TraversalState {
    let input = input.filter(|s| !s.is_empty());
    let question_text = question_text.filter(|s| !s.is_empty());
    if let (Some(input), Some(question_text)) = (input, question_text) {
        history.upsert_answer(question_text, input);
    }

    let Some(question) = graph.find(question_id) else {
        warn!(question_id, "Question not found");
        return TraversalState::unavailable(question_id, history);
    };

    history.visit(question_id);
    TraversalState::at(question, history)
}
