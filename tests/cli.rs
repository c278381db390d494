use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get the default document path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".home-dashboard").join("dashboard.json")
}

const BINARY_NAME: &str = "home-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Without a document on disk the bundled dashboard is used.
fn routes_lists_bundled_dashboard() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("routes")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Banking -> /banking"))
        .stdout(contains("Ideas -> /ideas"))
        .stdout(contains("Links -> /links"));
}

#[test]
fn layout_reports_row_orientation() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("layout")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Row 1 [horizontal]: Banking, Ideas"))
        .stdout(contains("Row 3 [vertical]: Add"));
}

#[test]
/// init-config writes the document once and refuses to overwrite it.
fn init_config_creates_file_and_keeps_existing() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init-config")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Dashboard document written"));
    assert!(config_path.exists());
    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("HomeDashboard"));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init-config")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init-config")
        .arg("--force")
        .env("HOME", tmp.path())
        .assert()
        .success();
}

#[test]
/// The document at the default location is picked up by later commands.
fn written_document_is_loaded_from_home() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(
        &config_path,
        r##"{
            "screen": "Custom",
            "header": { "title": "Mine", "backgroundColor": "#000000", "textColor": "#FFFFFF" },
            "content": [
                { "row": [ { "type": "card", "title": "Explore", "icon": "wifi" } ] }
            ]
        }"##,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("routes")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Explore -> /explore"));
}

#[test]
fn malformed_config_is_rejected() {
    let tmp = temp_home_dir();
    let path = tmp.path().join("broken.json");
    fs::write(&path, r#"{ "content": [] }"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("layout")
        .arg("--config")
        .arg(&path)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("missing field `header`"));
}

#[test]
/// Titles that do not name a registered screen are flagged, not rejected.
fn routes_flags_unregistered_titles() {
    let tmp = temp_home_dir();
    let path = tmp.path().join("dashboard.json");
    fs::write(
        &path,
        r##"{
            "header": { "title": "T", "backgroundColor": "#000000", "textColor": "#FFFFFF" },
            "content": [
                { "row": [
                    { "type": "card", "title": "My Links" },
                    { "type": "card", "title": "Home", "routeKey": "index" },
                    { "type": "chart", "title": "Stats" },
                    { "title": "Ideas" }
                ] }
            ]
        }"##,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("routes")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("My Links -> /my links (no screen registered)"))
        .stdout(contains("Home -> /index"))
        .stdout(contains("Stats -> (unknown card type \"chart\""))
        .stdout(contains("Ideas -> /ideas"));
}
