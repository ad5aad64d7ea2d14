//! Tests for form storage: the JSON file store, the in-memory store and
//! graph reloads.
mod common;
use common::*;
use formflow::prelude::*;
use std::fs;

#[test]
fn test_save_and_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("data"));
    let form = create_branching_form();

    let file_name = store.save(&form).expect("Failed to save form");
    assert_eq!(file_name, "PetSurveyFormFlow.json");

    let written = fs::read_to_string(dir.path().join("data").join(&file_name)).unwrap();
    assert!(written.contains("\"questionText\": \"Do you have a pet?\""));
    assert!(written.contains("\"helpText\""));

    for name in ["PetSurvey", "PetSurveyFormFlow.json"] {
        let graph = store.read(name).into_result().expect("Failed to read form");
        assert_eq!(graph.title(), "Pet Survey");
        assert_eq!(graph.questions(), form.questions.as_slice());
    }
}

#[test]
fn test_save_overwrites_same_title() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store.save(&create_linear_form()).unwrap();
    let mut updated = create_linear_form();
    updated.questions.pop();
    store.save(&updated).unwrap();

    assert_eq!(store.load("Linear").len(), 2);
    assert_eq!(store.list_names().unwrap().len(), 1);
}

#[test]
fn test_save_requires_title() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let result = store.save(&Form::new("", vec![Question::new(0, "Q", "text")]));
    assert!(matches!(result, Err(StoreError::MissingTitle)));
    assert!(store.list_names().unwrap().is_empty());
}

#[test]
fn test_dotted_title_saves_reads_and_deletes() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let form = Form::new(
        "Any comments...",
        vec![
            Question::new(0, "Comments?", "text"),
            Question::new(1, "Bye", "end"),
        ],
    );

    let file_name = store.save(&form).expect("Failed to save dotted title");
    assert_eq!(file_name, "Anycomments...FormFlow.json");
    assert!(dir.path().join(&file_name).is_file());

    let names: Vec<_> = store.list_names().unwrap().into_iter().collect();
    assert_eq!(names, vec!["Anycomments..."]);

    let graph = store.read("Anycomments...").into_result().unwrap();
    assert_eq!(graph.title(), "Any comments...");
    assert_eq!(store.summaries().len(), 1);

    store.delete("Anycomments...").unwrap();
    assert!(!dir.path().join(&file_name).exists());
}

#[test]
fn test_title_with_storage_suffix_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let result = store.save(&Form::new("xFormFlow.json", vec![Question::new(0, "Q", "end")]));
    assert!(matches!(result, Err(StoreError::InvalidName(_))));
    assert!(store.list_names().unwrap().is_empty());
    assert!(store.summaries().is_empty());
}

#[test]
fn test_list_names_and_summaries() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.save(&create_linear_form()).unwrap();
    store.save(&create_branching_form()).unwrap();
    fs::write(dir.path().join("BrokenFormFlow.json"), "{ not json").unwrap();

    let names: Vec<_> = store.list_names().unwrap().into_iter().collect();
    assert_eq!(names, vec!["Broken", "Linear", "PetSurvey"]);

    let summaries = store.summaries();
    assert_eq!(
        summaries,
        vec![
            FormSummary {
                title: "Linear".to_string(),
                file_name: "LinearFormFlow.json".to_string(),
                question_count: 3,
            },
            FormSummary {
                title: "Pet Survey".to_string(),
                file_name: "PetSurveyFormFlow.json".to_string(),
                question_count: 5,
            },
        ]
    );
}

#[test]
fn test_delete_removes_form_and_ignores_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let file_name = store.save(&create_linear_form()).unwrap();

    store.delete(&file_name).expect("Failed to delete form");
    assert!(!dir.path().join(&file_name).exists());
    assert!(matches!(store.read("Linear"), LoadOutcome::Missing { .. }));

    store.delete("Linear").expect("Deleting a missing form should succeed");
    assert!(matches!(
        store.delete("../escape"),
        Err(StoreError::InvalidName(_))
    ));
}

#[test]
fn test_missing_and_corrupt_forms_load_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    fs::write(dir.path().join("BrokenFormFlow.json"), "{ not json").unwrap();

    match store.read("Nope") {
        LoadOutcome::Missing { name } => assert_eq!(name, "NopeFormFlow.json"),
        other => panic!("Expected Missing, got {:?}", other),
    }
    match store.read("Broken") {
        LoadOutcome::Corrupt { name, .. } => assert_eq!(name, "BrokenFormFlow.json"),
        other => panic!("Expected Corrupt, got {:?}", other),
    }

    assert!(store.load("Nope").is_empty());
    assert!(store.load("Broken").is_empty());
}

#[test]
fn test_reads_case_insensitive_documents() {
    let dir = tempfile::tempdir().unwrap();
    let document = r#"{
        "title": "Report It",
        "questions": [
            {
                "Id": 0, "QuestionText": "What happened?", "Type": "radio", "Required": true,
                "Options": [
                    { "Text": "Spill", "Destination": 1 },
                    { "Text": "Other", "Destination": null }
                ],
                "HelpText": null, "X": 120, "Y": 40
            },
            { "Id": 1, "QuestionText": "Reported, thanks", "Type": "end", "Required": false, "Options": [] }
        ]
    }"#;
    fs::write(dir.path().join("ReportItFormFlow.json"), document).unwrap();

    let store = JsonFileStore::new(dir.path());
    let graph = store.read("Report It").into_result().unwrap();

    let first = graph.entry().expect("entry question");
    assert_eq!(first.text, "What happened?");
    assert!(first.required);
    assert_eq!(first.x, 120);
    assert_eq!(first.options[0].destination, Some(1));
    assert_eq!(first.options[1].destination, None);
    assert!(graph.find(1).unwrap().is_terminal());
}

#[test]
fn test_reload_installs_form_and_clears_on_failure() {
    let store = MemoryStore::new();
    store.save(&create_linear_form()).unwrap();
    store.insert_raw("Broken", "[1, 2").unwrap();

    let handle = GraphHandle::default();
    let engine = FlowEngine::new(handle.clone());
    assert!(engine.start().is_unavailable());

    let graph = handle.reload(&store, "Linear").expect("Failed to reload");
    assert_eq!(graph.len(), 3);
    assert_eq!(engine.start().status, FlowStatus::AtQuestion(0));

    let err = handle.reload(&store, "Broken").unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
    assert!(handle.snapshot().is_empty());
    assert!(engine.start().is_unavailable());

    let err = handle.reload(&store, "Absent").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(name) if name == "AbsentFormFlow.json"));
}

#[test]
fn test_memory_store_matches_file_store_semantics() {
    let store = MemoryStore::new();
    let file_name = store.save(&create_branching_form()).unwrap();
    assert_eq!(file_name, "PetSurveyFormFlow.json");
    assert!(store.read("PetSurvey").is_loaded());

    store.insert_raw("Broken", "{").unwrap();
    assert_eq!(store.summaries().len(), 1);
    assert!(matches!(store.read("Broken"), LoadOutcome::Corrupt { .. }));

    store.delete("PetSurvey").unwrap();
    store.delete("PetSurvey").unwrap();
    let names: Vec<_> = store.list_names().unwrap().into_iter().collect();
    assert_eq!(names, vec!["Broken"]);
}
