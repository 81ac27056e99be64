use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pkgtally() -> Command {
    Command::cargo_bin("pkgtally").unwrap()
}

fn write_input(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("input.json");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn fourteen_days() -> String {
    let records: Vec<String> = (1..=14)
        .map(|d| format!(r#"{{"day":"2025-03-{d:02}","downloads":10}}"#))
        .collect();
    format!("[{}]", records.join(","))
}

#[test]
fn test_weekly_two_full_weeks() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &fourteen_days());

    pkgtally()
        .args([
            "weekly", "--input", &input, "--start", "2025-03-01", "--end", "2025-03-14",
            "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weekStart\": \"2025-03-01\""))
        .stdout(predicate::str::contains("\"weekEnd\": \"2025-03-07\""))
        .stdout(predicate::str::contains("\"weekStart\": \"2025-03-08\""))
        .stdout(predicate::str::contains("\"weekEnd\": \"2025-03-14\""))
        .stdout(predicate::str::contains("\"downloads\": 70"));
}

#[test]
fn test_weekly_text_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &fourteen_days());

    pkgtally()
        .args([
            "weekly", "--input", &input, "--start", "2025-03-01", "--end", "2025-03-14",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly downloads"))
        .stdout(predicate::str::contains("2025-03-01..2025-03-07"))
        .stdout(predicate::str::contains("140 downloads across 2 weeks"));
}

#[test]
fn test_weekly_last_bucket_clamped_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"[{"day":"2025-03-01","downloads":5},{"day":"2025-03-02","downloads":5},{"day":"2025-03-08","downloads":10}]"#,
    );

    pkgtally()
        .args([
            "weekly", "--input", &input, "--start", "2025-03-01", "--end", "2025-03-09",
            "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weekEnd\": \"2025-03-09\""));
}

#[test]
fn test_weekly_empty_series_yields_no_buckets() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "[]");

    pkgtally()
        .args([
            "weekly", "--input", &input, "--start", "2025-03-01", "--end", "2025-03-14",
            "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_weekly_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, r#"[{"day":"2025-03-01","downloads":1}]"#);

    pkgtally()
        .args([
            "weekly", "--input", &input, "--start", "2025-03-14", "--end", "2025-03-01",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "invalid range: start 2025-03-14 is after end 2025-03-01",
        ));
}

#[test]
fn test_weekly_rejects_malformed_range_date() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, r#"[{"day":"2025-03-01","downloads":1}]"#);

    pkgtally()
        .args([
            "weekly", "--input", &input, "--start", "03/01/2025", "--end", "2025-03-14",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid date '03/01/2025'"));
}

#[test]
fn test_weekly_points_outside_range_not_counted() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"[{"day":"2025-02-28","downloads":100},{"day":"2025-03-02","downloads":7}]"#,
    );

    pkgtally()
        .args([
            "weekly", "--input", &input, "--start", "2025-03-01", "--end", "2025-03-07",
            "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"downloads\": 7"))
        .stdout(predicate::str::contains("100").not());
}
