//! End-to-end CLI tests for the harvester binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("fab-harvester").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Harvest Flesh and Blood"))
        .stdout(predicate::str::contains("--strict-tls"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("fab-harvester").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fab-harvester"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("fab-harvester").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that an out-of-range timeout is rejected before any request.
#[test]
fn test_binary_timeout_out_of_range_returns_error() {
    let mut cmd = Command::cargo_bin("fab-harvester").unwrap();
    cmd.args(["--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout"));
}

/// Test that a missing set-code file fails the run with its path.
#[test]
fn test_binary_missing_set_codes_file_returns_error() {
    let mut cmd = Command::cargo_bin("fab-harvester").unwrap();
    cmd.args(["--set-codes", "/nonexistent/set_codes.json", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/set_codes.json"));
}

/// Test that an unreachable index aborts the run with a non-zero exit.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_unavailable_index_returns_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collectors-centre/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let index_url = format!("{}/collectors-centre/", server.uri());

    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("fab-harvester")
            .unwrap()
            .args(["--index-url", &index_url, "-q"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("set index unavailable"));
    })
    .await
    .unwrap();
}

/// Test a full run writing JSON output, the database and the log file.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_full_run_writes_outputs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collectors-centre/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a class="item-link" href="/sets/wtr/">Welcome to Rathe</a>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sets/wtr/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<table></table><table><tbody>\
             <tr><td>WTR001</td><td>Rhinar, Reckless Rampage</td><td>Rainbow Foil</td><td></td></tr>\
             <tr><td>WTR006</td><td>Alpha Rampage (1)</td><td>Standard</td><td></td></tr>\
             </tbody></table>",
        ))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let output = temp_dir.path().join("cards.json");
    let db = temp_dir.path().join("cards.db");
    let log = temp_dir.path().join("harvest.log");
    let index_url = format!("{}/collectors-centre/", server.uri());

    let args = vec![
        "--index-url".to_string(),
        index_url,
        "-o".to_string(),
        output.display().to_string(),
        "--db".to_string(),
        db.display().to_string(),
        "--log-file".to_string(),
        log.display().to_string(),
    ];
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("fab-harvester")
            .unwrap()
            .args(&args)
            .assert()
            .success();
    })
    .await
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let records = json.as_array().expect("output should be a JSON array");
    assert_eq!(records.len(), 2);
    assert!(
        records
            .iter()
            .any(|r| r["display_name"] == "Alpha Rampage" && r["color"] == "Red"),
        "Expected Alpha Rampage in: {json}"
    );

    assert!(db.exists(), "Database file should be created");

    let log_contents = std::fs::read_to_string(&log).unwrap();
    assert!(
        log_contents.contains(" - Info: Harvest finished"),
        "Expected summary line in: {log_contents}"
    );
}
