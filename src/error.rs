use thiserror::Error;

/// Errors raised at the form storage boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Form '{0}' was not found")]
    NotFound(String),

    #[error("Form name '{0}' is not a valid storage name")]
    InvalidName(String),

    #[error("Form data or title is missing")]
    MissingTitle,

    #[error("I/O failure on form '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Form '{name}' could not be parsed: {reason}")]
    Malformed { name: String, reason: String },
}

/// Errors raised when a caller-held history token cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History token is malformed: {0}")]
    Malformed(String),

    #[error("History could not be encoded: {0}")]
    Encode(String),
}

/// Errors raised while validating a submitted answer.
///
/// Graph-shape problems (unknown ids, missing routes) never show up here; the
/// engine degrades those into an unavailable state instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Question {question_id} requires an answer")]
    Required { question_id: i32 },

    #[error("Question {question_id} has no option matching '{choice}'")]
    InvalidOption { question_id: i32, choice: String },
}
