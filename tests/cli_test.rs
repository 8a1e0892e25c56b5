//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tally(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("tally"));
    cmd.args(["--data-dir", data_dir.to_str().unwrap()]);
    cmd
}

/// Run `tally add <name>` and return the new habit's id via `list --json`.
fn add_habit(data_dir: &Path, name: &str) -> String {
    tally(data_dir).args(["add", name]).assert().success();

    let output = tally(data_dir)
        .args(["list", "--json"])
        .output()
        .expect("list --json runs");
    let habits: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json is valid JSON");
    habits[0]["id"].as_str().expect("habit has an id").to_string()
}

#[test]
fn cli_no_args_shows_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tally(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tally"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Personal habit tracker"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tally"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_add_then_list_persists_across_invocations() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    tally(temp.path())
        .args(["add", "Drink", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Drink water'"));

    tally(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drink water"));
    Ok(())
}

#[test]
fn cli_list_shows_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add_habit(temp.path(), "Read");
    add_habit(temp.path(), "Stretch");

    let output = tally(temp.path()).arg("list").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let stretch = stdout.find("Stretch").expect("Stretch is listed");
    let read = stdout.find("Read").expect("Read is listed");
    assert!(stretch < read, "newest habit should be listed first");
    Ok(())
}

#[test]
fn cli_add_empty_name_is_tolerated() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    tally(temp.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stderr(predicate::str::contains("empty"));

    tally(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet"));
    Ok(())
}

#[test]
fn cli_toggle_marks_done_and_back() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let id = add_habit(temp.path(), "Read");

    tally(temp.path())
        .args(["toggle", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now done"));

    tally(temp.path())
        .args(["toggle", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now pending"));
    Ok(())
}

#[test]
fn cli_toggle_accepts_id_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let id = add_habit(temp.path(), "Read");

    tally(temp.path())
        .args(["toggle", &id[..6]])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now done"));
    Ok(())
}

#[test]
fn cli_toggle_unknown_id_warns_but_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add_habit(temp.path(), "Read");

    tally(temp.path())
        .args(["toggle", "zzzz"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No habit matches"));
    Ok(())
}

#[test]
fn cli_status_counts_done_habits() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let id = add_habit(temp.path(), "Read");
    add_habit(temp.path(), "Stretch");

    tally(temp.path()).args(["toggle", &id]).assert().success();

    tally(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 done, 1 pending"));
    Ok(())
}

#[test]
fn cli_survives_corrupted_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("habits.json"), "definitely not json")?;

    tally(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet"));
    Ok(())
}

#[test]
fn cli_list_json_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add_habit(temp.path(), "Read");

    let output = tally(temp.path()).args(["list", "--json"]).output()?;
    let habits: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(habits[0]["name"], "Read");
    assert_eq!(habits[0]["doneToday"], false);
    Ok(())
}

#[test]
fn cli_quiet_hides_header() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    add_habit(temp.path(), "Read");

    tally(temp.path())
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habits").not())
        .stdout(predicate::str::contains("Read"));
    Ok(())
}

#[test]
fn cli_data_dir_env_var_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("tally"));
    cmd.env("TALLY_DATA_DIR", temp.path());
    cmd.args(["add", "Read"]);
    cmd.assert().success();

    assert!(temp.path().join("habits.json").exists());
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tally(temp.path()).args(["--debug", "status"]).assert().success();
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tally"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("tally"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tally"));
    Ok(())
}
