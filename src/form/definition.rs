use serde::{Deserialize, Serialize};

/// Type tag marking a terminal question.
pub const END_TYPE: &str = "end";

/// Id of the question every traversal starts from.
pub const ENTRY_QUESTION_ID: i32 = 0;

/// A named, ordered collection of questions. Identity is the title.
///
/// Deserialization accepts lowercase and camelCase keys directly; full
/// case-insensitivity is provided by [`crate::form::parse_form`], which
/// normalizes keys before handing the document to serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Form {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }
}

/// A single node in the question graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Question {
    pub id: i32,
    #[serde(
        rename(serialize = "questionText", deserialize = "questiontext"),
        alias = "questionText"
    )]
    pub text: String,
    /// Widget/routing tag. `"end"` marks a terminal question.
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
    pub options: Vec<QuestionOption>,
    #[serde(rename(deserialize = "helptext"), alias = "helpText")]
    pub help_text: Option<String>,
    /// Editor layout metadata, ignored by traversal.
    pub x: i32,
    pub y: i32,
}

impl Question {
    pub fn new(id: i32, text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn with_option(mut self, option: QuestionOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn mark_required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == END_TYPE
    }

    /// Finds the option whose label matches `text` exactly.
    pub fn option_by_text(&self, text: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.text == text)
    }
}

/// One selectable answer on a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionOption {
    pub text: String,
    /// Question to route to when chosen. `None` falls through to the next
    /// question in document order.
    pub destination: Option<i32>,
}

impl QuestionOption {
    pub fn new(text: impl Into<String>, destination: Option<i32>) -> Self {
        Self {
            text: text.into(),
            destination,
        }
    }
}
