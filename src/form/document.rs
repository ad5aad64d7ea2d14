//! Reading and writing persisted form documents.
//!
//! Property names are matched case-insensitively on read and written in
//! camelCase. Storage names are derived from the form title.
use super::definition::Form;
use serde_json::{Map, Value};

/// Suffix every stored form file carries.
pub const STORAGE_SUFFIX: &str = "FormFlow.json";

/// Derives the storage name for a form title: spaces removed, suffix appended.
pub fn storage_name(title: &str) -> String {
    let mut name: String = title.chars().filter(|c| *c != ' ').collect();
    name.push_str(STORAGE_SUFFIX);
    name
}

/// Strips the storage suffix from a file name, giving the name shown in listings.
pub fn display_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(STORAGE_SUFFIX)
}

/// Accepts either a display name or a full storage name and returns the
/// storage name.
pub fn resolve_storage_name(name: &str) -> String {
    if name.ends_with(STORAGE_SUFFIX) {
        name.to_string()
    } else {
        storage_name(name)
    }
}

/// Parses a form document, matching property names case-insensitively.
pub fn parse_form(json: &str) -> Result<Form, serde_json::Error> {
    let raw: Value = serde_json::from_str(json)?;
    serde_json::from_value(lowercase_keys(raw))
}

/// Serializes a form as indented camelCase JSON.
pub fn to_document(form: &Form) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(form)
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, inner) in map {
                // Later duplicates win, matching last-property-wins JSON readers.
                normalized.insert(key.to_lowercase(), lowercase_keys(inner));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
