use super::{FormStore, LoadOutcome, checked_storage_name, name_for_save};
use crate::error::StoreError;
use crate::form::{Form, QuestionGraph, display_name, parse_form, to_document};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

/// In-process store keeping serialized documents keyed by storage name.
///
/// Documents go through the same codec as [`super::JsonFileStore`], so a
/// corrupt entry inserted with [`MemoryStore::insert_raw`] behaves exactly
/// like a corrupt file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw document under `name` without validating it.
    pub fn insert_raw(&self, name: &str, document: impl Into<String>) -> Result<(), StoreError> {
        let file_name = checked_storage_name(name)?;
        self.documents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(file_name, document.into());
        Ok(())
    }
}

impl FormStore for MemoryStore {
    fn read(&self, name: &str) -> LoadOutcome {
        let file_name = match checked_storage_name(name) {
            Ok(file_name) => file_name,
            Err(e) => {
                return LoadOutcome::Corrupt {
                    name: name.to_string(),
                    reason: e.to_string(),
                };
            }
        };

        let documents = self.documents.read().unwrap_or_else(|e| e.into_inner());
        let Some(document) = documents.get(&file_name) else {
            return LoadOutcome::Missing { name: file_name };
        };

        match parse_form(document) {
            Ok(form) => LoadOutcome::Loaded(QuestionGraph::new(form)),
            Err(e) => LoadOutcome::Corrupt {
                name: file_name,
                reason: e.to_string(),
            },
        }
    }

    fn list_names(&self) -> Result<BTreeSet<String>, StoreError> {
        let documents = self.documents.read().unwrap_or_else(|e| e.into_inner());
        Ok(documents
            .keys()
            .filter_map(|key| display_name(key))
            .map(str::to_string)
            .collect())
    }

    fn save(&self, form: &Form) -> Result<String, StoreError> {
        let file_name = name_for_save(form)?;
        let json = to_document(form).map_err(|e| StoreError::Malformed {
            name: file_name.clone(),
            reason: e.to_string(),
        })?;
        self.documents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(file_name.clone(), json);
        Ok(file_name)
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let file_name = checked_storage_name(name)?;
        self.documents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&file_name);
        Ok(())
    }
}
