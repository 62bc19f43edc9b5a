use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_help_lists_options() {
    let mut cmd = Command::new(cargo_bin!("loanbook"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--api-prefix"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--log-format"));
}

#[test]
fn test_missing_seed_file_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_seed.csv");

    let mut cmd = Command::new(cargo_bin!("loanbook"));
    cmd.arg("--seed").arg(&missing).arg("--bind").arg("127.0.0.1:0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open seed file"));
}

#[test]
fn test_invalid_bind_address_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("loanbook"));
    cmd.arg("--bind").arg("not-an-address");

    cmd.assert().failure().stderr(predicate::str::contains("--bind"));
}
