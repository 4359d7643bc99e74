// ABOUTME: Integration tests for the boj CLI binary.
// ABOUTME: Tests fetch mode against a mock judge, saved-page mode, and failure paths.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<table class="table" id="problem-info">
  <thead><tr><th>시간 제한</th><th>메모리 제한</th></tr></thead>
  <tbody><tr><td>1 초</td><td>512 MB</td></tr></tbody>
</table>
<pre class="sampledata" id="x-input-1">1 2
</pre>
<pre class="sampledata" id="x-output-1">3
</pre>
</body></html>"#;

fn boj_cmd() -> Command {
    Command::cargo_bin("boj").unwrap()
}

#[test]
fn fetch_writes_config_and_testcases() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/problem/1000");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(PAGE);
    });

    let temp_dir = TempDir::new().unwrap();

    boj_cmd()
        .arg("1000")
        .arg("--origin")
        .arg(server.base_url())
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added config.yaml"))
        .stdout(predicate::str::contains("Added 1.in"))
        .stdout(predicate::str::contains("Added 1.out"));

    mock.assert();

    let dir = temp_dir.path().join("BOJ-1000");
    let config = fs::read_to_string(dir.join("config.yaml")).unwrap();
    assert!(config.contains("memory: 536870912"));
    assert!(config.contains("cpu_time: 1000"));
    assert!(config.contains("real_time: 1000"));
    assert_eq!(fs::read_to_string(dir.join("testcases/1.in")).unwrap(), "1 2\n");
    assert_eq!(fs::read_to_string(dir.join("testcases/1.out")).unwrap(), "3\n");
}

#[test]
fn http_error_writes_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/problem/404");
        then.status(404).body("not found");
    });

    let temp_dir = TempDir::new().unwrap();

    boj_cmd()
        .arg("404")
        .arg("--origin")
        .arg(server.base_url())
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("HTTP status 404"));

    mock.assert();
    assert!(!temp_dir.path().join("BOJ-404").exists());
}

#[test]
fn saved_page_without_samples_warns() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    fs::write(
        &html_path,
        r#"<table id="problem-info"><tbody><tr><td>1 초</td><td>64 MB</td></tr></tbody></table>"#,
    )
    .unwrap();

    boj_cmd()
        .arg("2000")
        .arg("--html")
        .arg(&html_path)
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added config.yaml"))
        .stdout(predicate::str::contains("no sample test case was found"));

    let dir = temp_dir.path().join("BOJ-2000");
    assert!(dir.join("config.yaml").exists());
    assert!(!dir.join("testcases").exists());
}

#[test]
fn missing_saved_page_fails() {
    let temp_dir = TempDir::new().unwrap();

    boj_cmd()
        .arg("1000")
        .arg("--html")
        .arg(temp_dir.path().join("missing.html"))
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed to read"));

    assert!(!temp_dir.path().join("BOJ-1000").exists());
}

#[test]
fn no_args_prints_usage() {
    boj_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
