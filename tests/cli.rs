#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use note::note::today_heading;

fn notes_file(temp: &TempDir) -> PathBuf {
    temp.path().join("notes.dump.md")
}

fn cmd(temp: &TempDir) -> Command {
    let mut c = Command::cargo_bin("note").unwrap();
    c.env("NOTESFILE", notes_file(temp))
        .env("NOTE_PROJECTS_FILE", temp.path().join("projects.json"))
        .env("NO_COLOR", "1")
        .env_remove("NOTESPATH")
        .env_remove("PROJECT")
        .env_remove("EDIT")
        .env_remove("QUIET")
        .env_remove("EDITOR")
        .env_remove("NOTES_HEADINGS_COUNT")
        .env_remove("NOTES_HEADINGS_LEVEL");
    c
}

fn read_notes(temp: &TempDir) -> String {
    fs::read_to_string(notes_file(temp)).expect("notes file")
}

#[test]
fn bare_arguments_append_a_dump_entry() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["-q", "hello world. and more"])
        .assert()
        .success();

    let content = read_notes(&temp);
    assert!(content.starts_with("# Notes\n"));
    assert!(content.contains(&format!("\n## {}\n", today_heading())));
    assert!(content.contains("Hello world\nAnd more\n"));
}

#[test]
fn dump_subcommand_matches_bare_arguments() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["dump", "-q", "same thing"]).assert().success();
    assert!(read_notes(&temp).contains("Same thing"));
}

#[test]
fn same_day_entries_share_one_date_heading() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["-q", "first entry"]).assert().success();
    cmd(&temp).args(["-q", "second entry"]).assert().success();

    let content = read_notes(&temp);
    assert_eq!(content.matches("\n## ").count(), 1);
    assert!(content.contains("First entry"));
    assert!(content.contains("Second entry"));
}

#[test]
fn todo_entries_are_checkboxes() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["todo", "-q", "buy milk"]).assert().success();

    let content = read_notes(&temp);
    assert!(content.starts_with("# Todo\n"));
    assert!(content.contains("- [ ] Buy milk"));
}

#[test]
fn bookmark_entries_are_links_with_tags() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["bookmark", "https://example.com", "-D", "Example", "-T", "ref,web", "-q"])
        .assert()
        .success();

    let content = read_notes(&temp);
    assert!(content.starts_with("# Bookmarks\n"));
    assert!(content.contains("[Example](https://example.com) #ref #web"));
}

#[test]
fn issue_entries_get_their_own_heading_without_a_date() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["issue", "Broken build", "CI fails on main", "-T", "bug", "-q"])
        .assert()
        .success();

    let content = read_notes(&temp);
    assert!(content.starts_with("# Issues\n"));
    assert!(content.contains("\n## Broken build\n"));
    assert!(content.contains("Status: open"));
    assert!(content.contains("CI fails on main"));
    assert!(content.contains("Tags: #bug"));
    assert!(!content.contains(&today_heading()));
}

#[test]
fn empty_dump_is_rejected() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to note here"));
    assert!(!notes_file(&temp).exists());
}

#[test]
fn append_previews_the_fresh_entry() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["fresh entry today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh entry today"));
}

#[test]
fn quiet_suppresses_the_preview() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["-q", "silent entry"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn peek_shows_only_the_requested_entries() {
    let temp = TempDir::new().unwrap();
    fs::write(
        notes_file(&temp),
        "# Notes\n\n## Mon, 01 Jan 2024\n\nolder entry\n\n## Tue, 02 Jan 2024\n\nnewer entry\n",
    )
    .unwrap();

    cmd(&temp)
        .args(["peek", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("newer entry"))
        .stdout(predicate::str::contains("older entry").not());
}

#[test]
fn peek_count_falls_back_to_the_environment() {
    let temp = TempDir::new().unwrap();
    fs::write(
        notes_file(&temp),
        "# Notes\n\n## Mon, 01 Jan 2024\n\nolder entry\n\n## Tue, 02 Jan 2024\n\nnewer entry\n",
    )
    .unwrap();

    cmd(&temp)
        .env("NOTES_HEADINGS_COUNT", "2")
        .args(["peek"])
        .assert()
        .success()
        .stdout(predicate::str::contains("older entry"))
        .stdout(predicate::str::contains("newer entry"));
}

#[test]
fn peek_on_a_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["peek"]).assert().failure();
}

#[test]
fn peek_rejects_an_out_of_range_level() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["peek", "-l", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("heading level"));
}

#[test]
fn edit_opens_the_editor_and_skips_the_append() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .env("EDITOR", "true")
        .args(["-e", "ignored words"])
        .assert()
        .success();

    assert_eq!(read_notes(&temp), "# Notes\n");
}

#[test]
fn appending_registers_the_directory_as_a_project() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["-q", "first entry"]).assert().success();

    let name = temp.path().file_name().unwrap().to_str().unwrap().to_string();
    let registry = fs::read_to_string(temp.path().join("projects.json")).unwrap();
    assert!(registry.contains(&name));

    cmd(&temp)
        .args(["-p", &name, "-q", "second entry"])
        .assert()
        .success();
    let content = read_notes(&temp);
    assert!(content.contains("First entry"));
    assert!(content.contains("Second entry"));
}

#[test]
fn unknown_project_fails() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["-p", "ghost", "-q", "some words"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find project"));
}
