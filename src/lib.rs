//! # FormFlow - Branching Form Store and Traversal Engine
//!
//! **FormFlow** stores forms as directed graphs of questions and walks end
//! users through them one question at a time. Each answer option can route
//! to a different next question; a question typed `"end"` finishes the flow.
//!
//! ## Core Workflow
//!
//! 1.  **Store Forms**: Save and load `*FormFlow.json` documents through a
//!     [`store::FormStore`] such as [`store::JsonFileStore`].
//! 2.  **Install a Graph**: Load one form into a [`form::GraphHandle`]. The
//!     handle is shared process-wide and swapped atomically on reload.
//! 3.  **Traverse**: A [`engine::FlowEngine`] computes each turn from the
//!     caller's [`engine::History`]. Nothing is kept between calls; the
//!     caller round-trips the history, usually as an encoded token.
//!
//! ## Quick Start
//!
//! ```rust
//! use formflow::prelude::*;
//!
//! let form = Form::new(
//!     "Feedback",
//!     vec![
//!         Question::new(0, "Did you enjoy it?", "radio")
//!             .with_option(QuestionOption::new("Yes", Some(2)))
//!             .with_option(QuestionOption::new("No", Some(1))),
//!         Question::new(1, "What went wrong?", "text"),
//!         Question::new(2, "Thanks!", "end"),
//!     ],
//! );
//!
//! let store = MemoryStore::new();
//! let file_name = store.save(&form).unwrap();
//! assert_eq!(file_name, "FeedbackFormFlow.json");
//!
//! let handle = GraphHandle::default();
//! handle.reload(&store, "Feedback").unwrap();
//! let engine = FlowEngine::new(handle);
//!
//! let state = engine.start();
//! assert_eq!(state.status, FlowStatus::AtQuestion(0));
//!
//! let state = engine.submit(state.history, 0, Answer::Choice(0)).unwrap();
//! assert!(state.is_terminal());
//! assert_eq!(state.question_order(), &[0, 2]);
//! assert_eq!(state.user_answers()[0].answer, "Yes");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod logging;
pub mod prelude;
pub mod store;
