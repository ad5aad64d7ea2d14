//! Common test utilities for building forms and engines.
use formflow::prelude::*;

/// Creates the linear form used by the walkthrough scenarios.
///
/// Flow: `Name?` -> `Age?` -> `Done` (end)
#[allow(dead_code)]
pub fn create_linear_form() -> Form {
    Form::new(
        "Linear",
        vec![
            Question::new(0, "Name?", "text"),
            Question::new(1, "Age?", "text"),
            Question::new(2, "Done", "end"),
        ],
    )
}

/// Creates a branching form.
///
/// Flow:
/// - 0 `Do you have a pet?` (required): Yes -> 1, No -> 3
/// - 1 `Which kind?`: Dog -> 2, Cat -> 2, Other -> next in order (2)
/// - 2 `Pet name?` (text) -> next in order (3)
/// - 3 `Anything else?` (text) -> next in order (4)
/// - 4 `Thanks` (end)
#[allow(dead_code)]
pub fn create_branching_form() -> Form {
    Form::new(
        "Pet Survey",
        vec![
            Question::new(0, "Do you have a pet?", "radio")
                .mark_required()
                .with_option(QuestionOption::new("Yes", Some(1)))
                .with_option(QuestionOption::new("No", Some(3))),
            Question::new(1, "Which kind?", "radio")
                .with_option(QuestionOption::new("Dog", Some(2)))
                .with_option(QuestionOption::new("Cat", Some(2)))
                .with_option(QuestionOption::new("Other", None)),
            Question::new(2, "Pet name?", "text").with_help_text("As you call them at home"),
            Question::new(3, "Anything else?", "text"),
            Question::new(4, "Thanks", "end"),
        ],
    )
}

/// Builds an engine over a fixed form.
#[allow(dead_code)]
pub fn engine_for(form: Form) -> FlowEngine {
    FlowEngine::new(GraphHandle::new(QuestionGraph::new(form)))
}

/// The current question's text, or `None` for a degraded state.
#[allow(dead_code)]
pub fn current_text(state: &TraversalState) -> Option<&str> {
    state.current_question.as_ref().map(|q| q.text.as_str())
}
