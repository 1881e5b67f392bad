#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn jot_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("jot"));
    cmd.env("JOTTER_HOME", dir.as_os_str())
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn stored_ids(dir: &Path) -> Vec<u64> {
    let raw = fs::read_to_string(dir.join("notes.json")).unwrap();
    let notes: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    notes.iter().map(|n| n["id"].as_u64().unwrap()).collect()
}

#[test]
fn test_empty_store_hint() {
    let temp = TempDir::new().unwrap();

    jot_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn test_create_list_filter_delete_workflow() {
    let temp = TempDir::new().unwrap();

    // 1. Create two notes
    jot_cmd(temp.path())
        .args(["new", "--no-editor", "Groceries", "-c", "milk, eggs", "-t", "home, errands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created"));

    jot_cmd(temp.path())
        .args(["new", "--no-editor", "Report", "-c", "Q3 numbers", "-t", "work"])
        .assert()
        .success();

    // 2. Both are listed in insertion order
    let output = jot_cmd(temp.path()).args(["list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let groceries = stdout.find("Groceries").unwrap();
    let report = stdout.find("Report").unwrap();
    assert!(groceries < report);
    assert!(stdout.contains("errands"));

    // 3. Search is case-insensitive and looks at content
    jot_cmd(temp.path())
        .args(["list", "-s", "EGGS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Report").not());

    // 4. Tag filter is exact
    jot_cmd(temp.path())
        .args(["ls", "-t", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report"))
        .stdout(predicate::str::contains("Groceries").not());

    jot_cmd(temp.path())
        .args(["ls", "-s", "nothing-like-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));

    // 5. Tags are sorted and unique
    jot_cmd(temp.path())
        .args(["tags"])
        .assert()
        .success()
        .stdout("errands\nhome\nwork\n");

    // 6. Delete the first note by id
    let ids = stored_ids(temp.path());
    assert_eq!(ids.len(), 2);
    let groceries_id = ids[0].to_string();

    jot_cmd(temp.path())
        .args(["rm", &groceries_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted"));

    assert_eq!(stored_ids(temp.path()), vec![ids[1]]);

    jot_cmd(temp.path())
        .args(["tags"])
        .assert()
        .success()
        .stdout("work\n");
}

#[test]
fn test_empty_title_is_not_saved() {
    let temp = TempDir::new().unwrap();

    jot_cmd(temp.path())
        .args(["new", "--no-editor", "   ", "-c", "orphan content"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title cannot be empty"));

    assert!(!temp.path().join("notes.json").exists());
}

#[test]
fn test_edit_updates_in_place() {
    let temp = TempDir::new().unwrap();

    jot_cmd(temp.path())
        .args(["new", "--no-editor", "Draft", "-t", "a, b"])
        .assert()
        .success();
    let id = stored_ids(temp.path())[0].to_string();

    jot_cmd(temp.path())
        .args(["edit", &id, "--title", "Final", "--untag", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated"));

    jot_cmd(temp.path())
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final"))
        .stdout(predicate::str::contains("b\n"));

    assert_eq!(stored_ids(temp.path()), vec![id.parse::<u64>().unwrap()]);
}

#[test]
fn test_edit_unknown_id_warns() {
    let temp = TempDir::new().unwrap();

    jot_cmd(temp.path())
        .args(["edit", "42", "--title", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 42 not found"));
}

#[test]
fn test_piped_content_becomes_note() {
    let temp = TempDir::new().unwrap();

    jot_cmd(temp.path())
        .args(["new"])
        .write_stdin("Piped title\n\nfrom stdin\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Piped title"));

    jot_cmd(temp.path())
        .args(["list", "-s", "stdin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Piped title"));
}

#[test]
fn test_data_dir_flag_and_config() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("elsewhere");

    jot_cmd(temp.path())
        .args(["--data-dir", other.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));
    assert!(other.is_dir());

    jot_cmd(temp.path())
        .args(["config", "storage-key", "work", "--data-dir", other.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key set to work"));

    jot_cmd(temp.path())
        .args(["new", "--no-editor", "Standup", "--data-dir", other.to_str().unwrap()])
        .assert()
        .success();

    assert!(other.join("work.json").exists());
    assert!(!temp.path().join("notes.json").exists());

    jot_cmd(temp.path())
        .args(["config", "preview-chars", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preview-chars"));
}

#[test]
fn test_malformed_store_lists_as_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.json"), "{ not json").unwrap();

    jot_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}
