/// Tests for the binary's argument surface. These exercise only the paths
/// that fail before the first hg invocation, so they run without a Mercurial
/// installation.
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any user-level ~/.hg-szz/config.json.
fn hg_szz() -> (Command, TempDir) {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("hg-szz").unwrap();
    cmd.env("HOME", home.path());
    cmd.env("USERPROFILE", home.path());
    (cmd, home)
}

#[test]
fn test_requires_a_keyword() {
    let (mut cmd, _home) = hg_szz();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("KEYWORD"));
}

#[test]
fn test_help_documents_the_rust_filter() {
    let (mut cmd, _home) = hg_szz();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--rust-only"))
        .stdout(predicate::str::contains("--repository"));
}

#[test]
fn test_rejects_unknown_flags() {
    let (mut cmd, _home) = hg_szz();
    cmd.args(["--frobnicate", "bug1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn test_version_flag() {
    let (mut cmd, _home) = hg_szz();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
