//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pagewright").expect("Failed to find pagewright binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Extract the record id from `about create` output
/// (format: "Created About record <ulid>")
fn extract_record_id(output: &[u8]) -> String {
    let text = String::from_utf8_lossy(output);
    text.lines()
        .find_map(|line| line.strip_prefix("Created About record "))
        .expect("create output should name the record id")
        .trim()
        .to_string()
}

// ============================================================================
// Create & List
// ============================================================================

#[test]
fn test_create_and_list() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["about", "create", "Our Story", "We started in a garage."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created About record"));

    cli_cmd(&data_dir)
        .args(["about", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Our Story"));
}

#[test]
fn test_list_empty() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["about", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No About records."));
}

#[test]
fn test_create_requires_content() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["about", "create", "Only a title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_create_empty_title_fails_validation() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["about", "create", "", "body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_create_inactive() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["about", "create", "Draft", "body", "--inactive"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["about", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○"));
}

// ============================================================================
// Show, Update, Delete
// ============================================================================

#[test]
fn test_show_round_trip() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir)
        .args([
            "about",
            "create",
            "Our Story",
            "We started in a garage.",
            "--image",
            "https://x/a.png",
        ])
        .output()
        .unwrap();
    let id = extract_record_id(&output.stdout);

    cli_cmd(&data_dir)
        .args(["about", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Our Story"))
        .stdout(predicate::str::contains("https://x/a.png"))
        .stdout(predicate::str::contains("We started in a garage."));
}

#[test]
fn test_show_unknown_id_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["about", "show", "01ARZ3NDEKTSV4RRFFQ69G5FAV"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_update_changes_title() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir)
        .args(["about", "create", "Old Title", "body"])
        .output()
        .unwrap();
    let id = extract_record_id(&output.stdout);

    cli_cmd(&data_dir)
        .args(["about", "update", &id, "--title", "New Title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated About record"));

    cli_cmd(&data_dir)
        .args(["about", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Title"))
        .stdout(predicate::str::contains("body"));
}

#[test]
fn test_update_clear_image() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir)
        .args([
            "about", "create", "t", "c", "--image", "https://x/a.png",
        ])
        .output()
        .unwrap();
    let id = extract_record_id(&output.stdout);

    cli_cmd(&data_dir)
        .args(["about", "update", &id, "--clear-image"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["about", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("image:      -"));
}

#[test]
fn test_delete_is_idempotent() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir)
        .args(["about", "create", "t", "c"])
        .output()
        .unwrap();
    let id = extract_record_id(&output.stdout);

    cli_cmd(&data_dir)
        .args(["about", "delete", &id])
        .assert()
        .success();

    // Deleting a missing record still succeeds
    cli_cmd(&data_dir)
        .args(["about", "delete", &id])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["about", "show", &id])
        .assert()
        .failure();
}

// ============================================================================
// Upload
// ============================================================================

#[test]
fn test_upload_missing_file_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["upload", "no-such-file.png"])
        .assert()
        .failure();
}
