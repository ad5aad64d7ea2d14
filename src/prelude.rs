//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to store forms and run traversals.
//!
//! # Example
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = FlowConfig::from_env();
//! let store = JsonFileStore::new(&config.data_dir);
//!
//! let handle = GraphHandle::default();
//! handle.reload(&store, "reportIt")?;
//!
//! let engine = FlowEngine::new(handle);
//! let state = engine.start();
//! let token = state.history.encode()?;
//!
//! // ... on the next request
//! let state = engine.advance_token(Some(token.as_str()), 1, Some("Alice"), Some("Name?"));
//! println!("Now at: {:?}", state.status);
//! # Ok(())
//! # }
//! ```

// Traversal
pub use crate::engine::{Answer, FlowEngine, FlowStatus, History, TraversalState, UserAnswer};

// Form model
pub use crate::form::{
    Form, FormIssue, GraphHandle, Question, QuestionGraph, QuestionOption, END_TYPE,
    ENTRY_QUESTION_ID,
};

// Storage
pub use crate::store::{FormStore, FormSummary, JsonFileStore, LoadOutcome, MemoryStore};

// Configuration
pub use crate::config::FlowConfig;

// Error types
pub use crate::error::{AnswerError, HistoryError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
