// Acceptance tests for the driver-credit command line.
//
// Each test runs the compiled binary against the built-in reference roster
// or a temporary roster file and checks exit status and output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cli() -> Command {
    let mut command = Command::cargo_bin("driver-credit-cli").expect("binary should exist");
    command
        .env_remove("RUST_LOG")
        .env_remove("DRIVER_MIN_TOTAL")
        .env_remove("DRIVER_MIN_QUANT")
        .env_remove("DRIVER_MIN_QUAL")
        .env_remove("DRIVER_ODOR_CEILING")
        .env_remove("DRIVER_APPEARANCE_FLOOR")
        .env("APP_LOG_LEVEL", "warn");
    command
}

#[test]
fn cli_version_flag() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("driver-credit"));
}

#[test]
fn rank_uses_default_thresholds() {
    cli()
        .arg("rank")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ranked 5 of 6 drivers"))
        .stdout(predicate::str::contains("D001 田中太郎 [partner company] total 95"))
        .stdout(predicate::str::contains("D006").and(predicate::str::contains("total 92")))
        .stdout(predicate::str::contains("D005").not());
}

#[test]
fn rank_is_the_default_command() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Ranked 5 of 6 drivers"));
}

#[test]
fn rank_thresholds_come_from_the_environment() {
    cli()
        .arg("rank")
        .env("DRIVER_MIN_TOTAL", "90")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ranked 2 of 6 drivers"))
        .stdout(predicate::str::contains("D002").not());
}

#[test]
fn invalid_environment_threshold_fails() {
    cli()
        .arg("rank")
        .env("DRIVER_MIN_TOTAL", "high")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn rank_keyword_json_output() {
    cli()
        .args(["rank", "--keyword", "川崎", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"driver_id\": \"D004\""))
        .stdout(predicate::str::contains("\"driver_id\": \"D001\""))
        .stdout(predicate::str::contains("\"driver_id\": \"D002\"").not());
}

#[test]
fn rank_overnight_window_and_weekdays() {
    cli()
        .args([
            "rank",
            "--time-start",
            "05:00",
            "--time-end",
            "07:00",
            "--weekday",
            "sun",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ranked 1 of 6 drivers"))
        .stdout(predicate::str::contains("D006"));
}

#[test]
fn rank_rejects_malformed_time_window() {
    cli()
        .args(["rank", "--time-start", "25:00", "--time-end", "07:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time window"));
}

#[test]
fn rank_explain_lists_screened_out_drivers() {
    cli()
        .args(["rank", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Screened out:"))
        .stdout(predicate::str::contains("D005: Total score 36 below minimum 70"));
}

#[test]
fn score_prints_breakdowns() {
    cli()
        .args(["score", "D001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 95/100 | quantitative 59/60 | qualitative 36/40"))
        .stdout(predicate::str::contains("safety: 15/15"))
        .stdout(predicate::str::contains("communication: 8/8"));
}

#[test]
fn score_unknown_driver_fails() {
    cli()
        .args(["score", "D999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no driver with id D999"));
}

#[test]
fn roster_lists_every_driver() {
    cli()
        .arg("roster")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 drivers on the roster"))
        .stdout(predicate::str::contains("D005 伊藤健 [sole proprietor] total 36"));
}

#[test]
fn roster_file_drafts_are_registered() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"name": "Kato", "affiliation": "sole_proprietor", "base_area": "Yokohama"}}]"#
    )
    .expect("write roster");

    cli()
        .arg("roster")
        .arg("--roster")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "D001 Kato [sole proprietor] total 79 (quant 49 / qual 30)",
        ));
}

#[test]
fn missing_roster_file_fails() {
    cli()
        .args(["roster", "--roster", "/nonexistent/drivers.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("io error"));
}
