//! Persistence of form definitions.
//!
//! A [`FormStore`] loads, lists, saves and deletes named form documents. The
//! traversal engine only ever consumes [`FormStore::load`] (indirectly, through
//! a [`crate::form::GraphHandle`] reload); the other operations serve the
//! editing surface.
use crate::error::StoreError;
use crate::form::{
    Form, Question, QuestionGraph, STORAGE_SUFFIX, resolve_storage_name, storage_name,
};
use std::collections::BTreeSet;
use tracing::{error, warn};

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// The typed result of reading a stored form.
///
/// Distinguishes "no such form" from "form exists but is unusable", even
/// though [`FormStore::load`] collapses both into an empty question list.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(QuestionGraph),
    Missing { name: String },
    Corrupt { name: String, reason: String },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn into_result(self) -> Result<QuestionGraph, StoreError> {
        match self {
            LoadOutcome::Loaded(graph) => Ok(graph),
            LoadOutcome::Missing { name } => Err(StoreError::NotFound(name)),
            LoadOutcome::Corrupt { name, reason } => Err(StoreError::Malformed { name, reason }),
        }
    }
}

/// Listing entry for a stored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSummary {
    pub title: String,
    pub file_name: String,
    pub question_count: usize,
}

/// Storage backend for form definitions.
pub trait FormStore: Send + Sync {
    /// Reads and parses the named form. `name` may be a display name or a
    /// full storage name.
    fn read(&self, name: &str) -> LoadOutcome;

    /// Display names of every stored form, sorted.
    fn list_names(&self) -> Result<BTreeSet<String>, StoreError>;

    /// Persists `form` under the name derived from its title and returns that
    /// storage name. Overwrites any existing form with the same name.
    fn save(&self, form: &Form) -> Result<String, StoreError>;

    /// Removes the named form. Removing a form that does not exist succeeds.
    fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Loads the named form's questions. Failures are logged and yield an
    /// empty list.
    fn load(&self, name: &str) -> Vec<Question> {
        match self.read(name) {
            LoadOutcome::Loaded(graph) => graph.questions().to_vec(),
            LoadOutcome::Missing { name } => {
                error!(form = %name, "Question data file not found");
                Vec::new()
            }
            LoadOutcome::Corrupt { name, reason } => {
                error!(form = %name, %reason, "Error loading question data");
                Vec::new()
            }
        }
    }

    /// Summaries of every readable stored form. Unreadable forms are skipped.
    fn summaries(&self) -> Vec<FormSummary> {
        let names = match self.list_names() {
            Ok(names) => names,
            Err(e) => {
                warn!(error = %e, "Could not list stored forms");
                return Vec::new();
            }
        };

        names
            .into_iter()
            .filter_map(|name| match self.read(&name) {
                LoadOutcome::Loaded(graph) => Some(FormSummary {
                    title: graph.title().to_string(),
                    file_name: resolve_storage_name(&name),
                    question_count: graph.len(),
                }),
                _ => None,
            })
            .collect()
    }
}

/// Resolves `name` to a storage name that is safe to use as a single path
/// component. The suffix is always present, so only separators can escape
/// the data directory.
pub(crate) fn checked_storage_name(name: &str) -> Result<String, StoreError> {
    if matches!(name.trim(), "." | "..") {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    let resolved = resolve_storage_name(name);
    if resolved.contains(&['/', '\\', '\0'][..]) {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(resolved)
}

/// Derives the storage name for a form about to be saved.
///
/// Titles that already end in the storage suffix are refused: their listed
/// display name would resolve to a different file.
pub(crate) fn name_for_save(form: &Form) -> Result<String, StoreError> {
    if form.title.trim().is_empty() {
        return Err(StoreError::MissingTitle);
    }
    let file_name = storage_name(&form.title);
    let stem = file_name.strip_suffix(STORAGE_SUFFIX).unwrap_or(file_name.as_str());
    if stem.ends_with(STORAGE_SUFFIX) {
        return Err(StoreError::InvalidName(form.title.clone()));
    }
    checked_storage_name(&file_name)
}
