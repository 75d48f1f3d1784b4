//! End-to-end tests of the commands that need no network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn cczone(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cczone").unwrap();
    cmd.arg("--config").arg(config).arg("--no-color");
    cmd.env_remove("CCZONE_API_BASE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("cczone")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("directory"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn config_path_honours_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cczone.toml");

    cczone(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cczone.toml"));
}

#[test]
fn init_set_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cczone.toml");

    cczone(&path).args(["config", "init"]).assert().success();
    assert!(path.exists());

    // A second init refuses to clobber the file
    cczone(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cczone(&path)
        .args(["config", "set", "api_base", "http://127.0.0.1:9/"])
        .assert()
        .success();

    cczone(&path)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"api_base\": \"http://127.0.0.1:9\""))
        .stdout(predicate::str::contains("\"probe_root\": \"clever-cloud.com\""));
}

#[test]
fn unknown_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cczone.toml");

    cczone(&path)
        .args(["config", "set", "api_key", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
    assert!(!path.exists());
}

#[test]
fn owned_domain_needs_no_network() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cczone.toml");

    cczone(&path)
        .args(["check", "https://my-app.cleverapps.io/", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_hosted\": true"))
        .stdout(predicate::str::contains("\"zone\": null"));
}
