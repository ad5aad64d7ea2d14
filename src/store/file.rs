use super::{FormStore, LoadOutcome, checked_storage_name, name_for_save};
use crate::error::StoreError;
use crate::form::{Form, QuestionGraph, display_name, parse_form, to_document};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores each form as `<title without spaces>FormFlow.json` inside one
/// data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, name: &str) -> Result<(String, PathBuf), StoreError> {
        let file_name = checked_storage_name(name)?;
        let path = self.data_dir.join(&file_name);
        Ok((file_name, path))
    }
}

impl FormStore for JsonFileStore {
    fn read(&self, name: &str) -> LoadOutcome {
        let (file_name, path) = match self.path_for(name) {
            Ok(resolved) => resolved,
            Err(e) => {
                return LoadOutcome::Corrupt {
                    name: name.to_string(),
                    reason: e.to_string(),
                };
            }
        };

        if !path.is_file() {
            return LoadOutcome::Missing { name: file_name };
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                return LoadOutcome::Corrupt {
                    name: file_name,
                    reason: format!("Could not read file '{}': {}", path.display(), e),
                };
            }
        };

        match parse_form(&content) {
            Ok(form) => {
                debug!(form = %file_name, questions = form.questions.len(), "Parsed form document");
                LoadOutcome::Loaded(QuestionGraph::new(form))
            }
            Err(e) => LoadOutcome::Corrupt {
                name: file_name,
                reason: e.to_string(),
            },
        }
    }

    fn list_names(&self) -> Result<BTreeSet<String>, StoreError> {
        if !self.data_dir.is_dir() {
            return Ok(BTreeSet::new());
        }

        let entries = fs::read_dir(&self.data_dir).map_err(|e| StoreError::Io {
            name: self.data_dir.display().to_string(),
            source: e,
        })?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io {
                name: self.data_dir.display().to_string(),
                source: e,
            })?;
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str().and_then(display_name) {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }

    fn save(&self, form: &Form) -> Result<String, StoreError> {
        let file_name = name_for_save(form)?;
        let path = self.data_dir.join(&file_name);

        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::Io {
            name: file_name.clone(),
            source: e,
        })?;

        let json = to_document(form).map_err(|e| StoreError::Malformed {
            name: file_name.clone(),
            reason: e.to_string(),
        })?;

        fs::write(&path, json).map_err(|e| StoreError::Io {
            name: file_name.clone(),
            source: e,
        })?;

        debug!(form = %file_name, path = %path.display(), "Saved form");
        Ok(file_name)
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let (file_name, path) = self.path_for(name)?;
        if !path.exists() {
            debug!(form = %file_name, "Delete requested for missing form");
            return Ok(());
        }

        fs::remove_file(&path).map_err(|e| StoreError::Io {
            name: file_name,
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::STORAGE_SUFFIX;

    #[test]
    fn only_suffixed_files_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("reportItFormFlow.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.json"), "{}").unwrap();
        fs::create_dir(dir.path().join(format!("nested{}", STORAGE_SUFFIX))).unwrap();

        let store = JsonFileStore::new(dir.path());
        let names = store.list_names().unwrap();

        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["reportIt"]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent"));
        assert!(store.list_names().unwrap().is_empty());
    }
}
