use crate::error::HistoryError;
use serde::{Deserialize, Serialize};

/// One recorded response, keyed by the literal question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_text: String,
    pub answer: String,
}

impl UserAnswer {
    pub fn new(question_text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            answer: answer.into(),
        }
    }
}

/// The caller-held part of a traversal: answers given so far and the ids of
/// the questions visited, in visiting order.
///
/// The engine never stores this; it is handed back on every call, usually as
/// the opaque token produced by [`History::encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    #[serde(default)]
    pub user_answers: Vec<UserAnswer>,
    #[serde(default)]
    pub question_order: Vec<i32>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History positioned at a single start question.
    pub fn starting_at(question_id: i32) -> Self {
        Self {
            user_answers: Vec::new(),
            question_order: vec![question_id],
        }
    }

    pub fn encode(&self) -> Result<String, HistoryError> {
        serde_json::to_string(self).map_err(|e| HistoryError::Encode(e.to_string()))
    }

    pub fn decode(token: &str) -> Result<Self, HistoryError> {
        serde_json::from_str(token).map_err(|e| HistoryError::Malformed(e.to_string()))
    }

    /// The answer recorded for a question text, if any.
    pub fn answer_for(&self, question_text: &str) -> Option<&str> {
        self.user_answers
            .iter()
            .find(|a| a.question_text == question_text)
            .map(|a| a.answer.as_str())
    }

    /// The most recently visited question id.
    pub fn current_id(&self) -> Option<i32> {
        self.question_order.last().copied()
    }

    /// Records `answer` for `question_text`, replacing any earlier value.
    pub(crate) fn upsert_answer(&mut self, question_text: &str, answer: &str) {
        match self
            .user_answers
            .iter_mut()
            .find(|a| a.question_text == question_text)
        {
            Some(existing) => existing.answer = answer.to_string(),
            None => self
                .user_answers
                .push(UserAnswer::new(question_text, answer)),
        }
    }

    /// Appends `question_id` unless it was already visited.
    pub(crate) fn visit(&mut self, question_id: i32) {
        if !self.question_order.contains(&question_id) {
            self.question_order.push(question_id);
        }
    }

    /// Drops the latest visit when there is an earlier one to return to.
    pub(crate) fn step_back(&mut self) -> Option<i32> {
        if self.question_order.len() > 1 {
            self.question_order.pop();
            self.current_id()
        } else {
            None
        }
    }
}
