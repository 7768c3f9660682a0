//! Engine-level tests for About record CRUD, validation, and registration
//!
//! These exercise the public `ContentEngine` surface the way the UI and CLI
//! use it. The upload endpoint is never contacted here, so the base URL is a
//! dead address.

use pagewright_core::{AboutDraft, AboutRecord, ContentEngine, CoreError};
use tempfile::tempdir;

const DEAD_UPLOAD_URL: &str = "http://127.0.0.1:9";

// ============================================================================
// Schema & Validation
// ============================================================================

#[test]
fn test_create_without_title_fails_validation() {
    let dir = tempdir().unwrap();
    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();

    let err = engine.create_about(&AboutDraft::new("", "body")).unwrap_err();
    match err {
        CoreError::Validation {
            collection, field, ..
        } => {
            assert_eq!(collection, "About");
            assert_eq!(field, "title");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_create_without_content_fails_validation() {
    let dir = tempdir().unwrap();
    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();

    let err = engine.create_about(&AboutDraft::new("title", "")).unwrap_err();
    assert!(matches!(err, CoreError::Validation { field, .. } if field == "content"));
}

#[test]
fn test_omitted_optional_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();

    // A draft deserialized from the minimal document: no image, no flag
    let draft: AboutDraft =
        serde_json::from_str(r#"{"title":"Our Story","content":"body"}"#).unwrap();
    let record = engine.create_about(&draft).unwrap();

    assert!(record.image.is_none());
    assert!(record.is_active, "is_active must default to true");
}

#[test]
fn test_registry_reports_about_collection() {
    let dir = tempdir().unwrap();
    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();

    let schema = engine.schemas().get(AboutRecord::COLLECTION).unwrap();
    assert_eq!(schema.name, "About");
    assert!(schema.timestamps);
}

#[test]
fn test_second_engine_reregisters_harmlessly() {
    // Two engines in one process, each installing the About schema on
    // startup: registration must be a no-op the second time around.
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();

    let a = ContentEngine::new(dir_a.path(), DEAD_UPLOAD_URL).unwrap();
    let b = ContentEngine::new(dir_b.path(), DEAD_UPLOAD_URL).unwrap();

    assert_eq!(a.schemas().len(), 1);
    assert_eq!(b.schemas().len(), 1);
    b.create_about(&AboutDraft::new("t", "c")).unwrap();
}

// ============================================================================
// CRUD Lifecycle
// ============================================================================

#[test]
fn test_full_record_lifecycle() {
    let dir = tempdir().unwrap();
    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();

    // Create
    let mut draft = AboutDraft::new("Our Story", "We started in a garage.");
    draft.image = Some("https://x/a.png".to_string());
    let created = engine.create_about(&draft).unwrap();
    assert_eq!(created.created_at, created.updated_at);

    // Read
    let loaded = engine.get_about(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);

    // Update: image removed (the widget's remove control reports "")
    let mut updated_draft = draft.clone();
    updated_draft.image = None;
    let updated = engine.update_about(&created.id, &updated_draft).unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.image.is_none());

    // Delete
    engine.delete_about(&created.id).unwrap();
    assert!(engine.get_about(&created.id).unwrap().is_none());
    assert!(engine.list_about().unwrap().is_empty());
}

#[test]
fn test_update_refreshes_timestamp() {
    let dir = tempdir().unwrap();
    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();

    let created = engine.create_about(&AboutDraft::new("t", "c")).unwrap();

    // Unix timestamps have 1-second granularity
    std::thread::sleep(std::time::Duration::from_millis(1001));

    let updated = engine
        .update_about(&created.id, &AboutDraft::new("t2", "c2"))
        .unwrap();
    assert!(updated.updated_at > created.updated_at);
}

#[test]
fn test_update_missing_record() {
    let dir = tempdir().unwrap();
    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();

    let err = engine
        .update_about("01ARZ3NDEKTSV4RRFFQ69G5FAV", &AboutDraft::new("t", "c"))
        .unwrap_err();
    assert!(matches!(err, CoreError::AboutNotFound(_)));
}

#[test]
fn test_records_persist_across_engines() {
    let dir = tempdir().unwrap();

    let id = {
        let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();
        engine
            .create_about(&AboutDraft::new("persisted", "body"))
            .unwrap()
            .id
    };

    let engine = ContentEngine::new(dir.path(), DEAD_UPLOAD_URL).unwrap();
    let loaded = engine.get_about(&id).unwrap().unwrap();
    assert_eq!(loaded.title, "persisted");
}
