//! End-to-end CLI tests for direito-prazos.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(clippy::unwrap_used)]
fn cmd() -> Command {
    Command::cargo_bin("direito-prazos").unwrap()
}

#[test]
fn test_calcular_business_days() {
    cmd()
        .args(["calcular", "2024-03-01", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-22"));
}

#[test]
fn test_calcular_calendar_days_no_roll() {
    // Lands on Natal and stays there under the calendar-day regime
    cmd()
        .args(["calcular", "2024-12-20", "5", "--regime", "corridos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-12-25"));
}

#[test]
fn test_calcular_json_output() {
    cmd()
        .args(["calcular", "2024-03-01", "15", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"final_date\": \"2024-03-22\""))
        .stdout(predicate::str::contains("\"regime\": \"DIAS_UTEIS\""));
}

#[test]
fn test_calcular_shows_derivation() {
    cmd()
        .args(["calcular", "2024-03-01", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sábado"))
        .stdout(predicate::str::contains("dia 1 de 2"));
}

#[test]
fn test_calcular_sem_etapas() {
    cmd()
        .args(["calcular", "2024-03-01", "2", "--sem-etapas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dia 1 de 2").not());
}

#[test]
fn test_calcular_rejects_invalid_date() {
    cmd()
        .args(["calcular", "01/03/2024", "15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_calcular_rejects_zero_days() {
    cmd()
        .args(["calcular", "2024-03-01", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day count"));
}

#[test]
fn test_calcular_rejects_unknown_regime() {
    cmd()
        .args(["calcular", "2024-03-01", "15", "--regime", "mixed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid regime"));
}
