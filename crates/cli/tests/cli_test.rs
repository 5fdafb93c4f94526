//! End-to-end tests driving the `drills` binary through stdin

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn drills(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("drills").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_guess_single_value_range() {
    let temp_dir = TempDir::new().unwrap();
    drills(&temp_dir)
        .args(["guess", "--min", "42", "--max", "42"])
        .write_stdin("50\n25\n37\n42\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Number Guessing Game!"))
        .stdout(predicate::str::contains("Too high! Try again."))
        .stdout(predicate::str::contains(
            "Congratulations! You guessed it right in 4 attempts.",
        ))
        .stdout(predicate::str::contains("Game Over! Your total score is: 1"));
}

#[test]
fn test_guess_reads_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings = serde_json::json!({
        "guess": { "min": 9, "max": 9, "attempt_limit": 1 }
    });
    fs::write(
        temp_dir.path().join(".drills.json"),
        serde_json::to_string_pretty(&settings).unwrap(),
    )
    .unwrap();

    drills(&temp_dir)
        .arg("guess")
        .write_stdin("1\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("between 9 and 9"))
        .stdout(predicate::str::contains(
            "Sorry, you've run out of attempts. The number was: 9",
        ))
        .stdout(predicate::str::contains("Game Over! Your total score is: 0"));
}

#[test]
fn test_guess_rejects_inverted_range() {
    let temp_dir = TempDir::new().unwrap();
    drills(&temp_dir)
        .args(["guess", "--min", "10", "--max", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid guessing game settings"));
}

#[test]
fn test_atm_session() {
    let temp_dir = TempDir::new().unwrap();
    drills(&temp_dir)
        .arg("atm")
        .write_stdin("2\n500\n1\n20000\n1\n500\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the ATM!"))
        .stdout(predicate::str::contains("Deposited: ₹500.00"))
        .stdout(predicate::str::contains(
            "Invalid withdraw amount or insufficient balance.",
        ))
        .stdout(predicate::str::contains("Your balance is: ₹10000.00"))
        .stdout(predicate::str::contains("Thank you for using the ATM. Goodbye!"));
}

#[test]
fn test_atm_currency_flags() {
    let temp_dir = TempDir::new().unwrap();
    drills(&temp_dir)
        .args([
            "atm",
            "--initial-balance",
            "20",
            "--currency-symbol",
            "$",
            "--currency-code",
            "USD",
        ])
        .write_stdin("1\n5\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter amount to withdraw (USD): "))
        .stdout(predicate::str::contains("Your balance is: $15.00"));
}

#[test]
fn test_atm_rejects_negative_initial_balance() {
    let temp_dir = TempDir::new().unwrap();
    drills(&temp_dir)
        .args(["atm", "--initial-balance", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ATM settings"));
}

#[test]
fn test_init_then_refuse_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    drills(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created settings"));
    assert!(temp_dir.path().join(".drills.json").exists());

    drills(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to overwrite"));
}

#[test]
fn test_explicit_config_flag() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.json");
    fs::write(&path, r#"{ "atm": { "initial_balance": 1.5 } }"#).unwrap();

    drills(&temp_dir)
        .args(["--config", "custom.json", "atm"])
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your balance is: ₹1.50"));
}
