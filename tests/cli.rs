use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger() -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env_remove("LEDGER_LOG").env_remove("RUST_LOG");
    cmd
}

fn write_snapshot(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("account.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_new_account_json() {
    ledger()
        .args([
            "account",
            "new",
            "Checking",
            "--currency",
            "EUR",
            "--opened",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Name\": \"Checking\""))
        .stdout(predicate::str::contains("\"Currency\": \"EUR\""))
        .stdout(predicate::str::contains("\"Valid\": false"));
}

#[test]
fn test_new_account_close_before_open_fails() {
    ledger()
        .args([
            "account",
            "new",
            "Checking",
            "--currency",
            "EUR",
            "--opened",
            "2024-01-01",
            "--closed",
            "2023-12-31",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Closed date is before opened date"));
}

#[test]
fn test_new_then_validate_round_trip() {
    let output = ledger()
        .args([
            "account",
            "new",
            "Savings",
            "--currency",
            "GBP",
            "--opened",
            "2020-01-01T09:30:00Z",
            "--closed",
            "2021-01-01T09:30:00Z",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dir = TempDir::new().unwrap();
    let path = write_snapshot(&dir, &String::from_utf8(output.stdout).unwrap());

    ledger()
        .args(["account", "validate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("valid: Savings (GBP)"));
}

#[test]
fn test_validate_rejects_zero_open_date() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{"Name":"Cash","Start":"1970-01-01T00:00:00Z","Currency":"EUR"}"#,
    );

    ledger()
        .args(["account", "validate"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Opened date is zero"));
}

#[test]
fn test_validate_rejects_blank_name() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{"Name":"  ","Start":"2024-01-01T00:00:00Z","Currency":"EUR"}"#,
    );

    ledger()
        .args(["account", "validate"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name cannot be empty"));
}

#[test]
fn test_check_balance() {
    let dir = TempDir::new().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{
            "Name": "Savings",
            "Start": "2024-01-01T00:00:00Z",
            "End": {"Time": "2024-06-30T00:00:00Z", "Valid": true},
            "Currency": "EUR"
        }"#,
    );

    ledger()
        .args(["account", "check-balance"])
        .arg(&path)
        .args(["--date", "2024-06-30", "--amount", "99.99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("accepted"));

    ledger()
        .args(["account", "check-balance"])
        .arg(&path)
        .args(["--date", "2023-12-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside of account time range"));
}
