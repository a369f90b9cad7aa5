use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a Command with --no-color flag for testing
///
/// The XDG config directories point at an empty directory under the target
/// dir, so a settings file on the host never leaks into a test run.
fn homestead_cmd() -> Command {
    let xdg_config = Path::new(env!("CARGO_TARGET_TMPDIR")).join("xdg-config-empty");
    fs::create_dir_all(&xdg_config).expect("Failed to create XDG config directory");

    let mut cmd = Command::cargo_bin("homestead").expect("Failed to find homestead binary");
    cmd.env("XDG_CONFIG_HOME", &xdg_config)
        .env("XDG_CONFIG_DIRS", &xdg_config)
        .arg("--no-color");
    cmd
}

/// Helper function to write a settings file into a temporary directory
fn create_settings_file(contents: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("config.json");
    fs::write(&path, contents).expect("Failed to write settings");
    let path = path.to_str().expect("Non UTF-8 temp path").to_string();
    (temp_dir, path)
}

#[test]
fn test_cli_plan_chicken_eggs() {
    homestead_cmd()
        .args([
            "plan",
            "chicken eggs",
            "--start",
            "2025-03-01",
            "--end",
            "2025-03-08",
            "--quantity",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan: 1 Chicken Eggs"))
        .stdout(predicate::str::contains(
            "Info: Estimated Birth/Hatch Window: 2025-03-22 to 2025-03-29",
        ))
        .stdout(predicate::str::contains(
            "Success: Approximate Processing Date: Starting around 2025-05-24",
        ))
        .stdout(predicate::str::contains("- **Total Feed Needed**: 15 lbs"))
        .stdout(predicate::str::contains("- **300lb Barrels**: 1"))
        .stdout(predicate::str::contains("| 2 | Incubation | 2025-03-08 | 2025-03-29 |"));
}

#[test]
fn test_cli_plan_turkey_chicks() {
    homestead_cmd()
        .args([
            "plan",
            "turkey-chicks",
            "--start",
            "2025-04-01",
            "--end",
            "2025-04-05",
            "-q",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Info: Arrival: Immediate start (already hatched).",
        ))
        .stdout(predicate::str::contains("Starting around 2025-08-05"))
        .stdout(predicate::str::contains("- **Total Feed Needed**: 750 lbs"))
        .stdout(predicate::str::contains("- **300lb Barrels**: 3"))
        .stdout(predicate::str::contains("| Incubation |").not());
}

#[test]
fn test_cli_plan_json_output() {
    let output = homestead_cmd()
        .args([
            "plan",
            "kunekune pigs",
            "--start",
            "2025-01-01",
            "--end",
            "2025-01-10",
            "--quantity",
            "2",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("Output should be valid JSON");
    assert_eq!(json["species"], "kunekune pigs");
    assert_eq!(json["window"]["start"], "2025-04-27");
    assert_eq!(json["window"]["end"], "2025-05-06");
    assert_eq!(json["processing_date"], "2026-05-05");
    assert_eq!(json["feed"]["barrels"], 5);
    assert_eq!(json["timeline"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["timeline"][1]["label"], "Gestation");
}

#[test]
fn test_cli_plan_json_is_repeatable() {
    let args = [
        "plan",
        "chicken chicks",
        "--start",
        "2025-06-01",
        "--end",
        "2025-06-03",
        "-q",
        "30",
        "--json",
    ];
    let first = homestead_cmd().args(args).output().expect("Failed to run");
    let second = homestead_cmd().args(args).output().expect("Failed to run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cli_plan_with_calendar_links() {
    homestead_cmd()
        .args([
            "plan",
            "chicken eggs",
            "--start",
            "2025-03-01",
            "--end",
            "2025-03-08",
            "--calendar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Calendar"))
        .stdout(predicate::str::contains(
            "https://calendar.google.com/calendar/render?action=TEMPLATE",
        ))
        .stdout(predicate::str::contains("dates=20250322%2F20250329"))
        .stdout(predicate::str::contains("dates=20250524%2F20250524"));
}

#[test]
fn test_cli_plan_json_with_calendar() {
    let output = homestead_cmd()
        .args([
            "plan",
            "turkey chicks",
            "--start",
            "2025-04-01",
            "--end",
            "2025-04-05",
            "--json",
            "--calendar",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("Output should be valid JSON");
    assert_eq!(json["plan"]["processing_date"], "2025-08-05");
    assert_eq!(json["calendar"][0]["title"], "Turkey Chicks: Processing");
}

#[test]
fn test_cli_plan_unknown_species() {
    homestead_cmd()
        .args([
            "plan",
            "goats",
            "--start",
            "2025-03-01",
            "--end",
            "2025-03-08",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Warning: Unknown species 'goats'"))
        .stdout(predicate::str::contains("# Plan").not())
        .stderr(predicate::str::contains("Planning request rejected"));
}

#[test]
fn test_cli_plan_inverted_range() {
    homestead_cmd()
        .args([
            "plan",
            "turkey chicks",
            "--start",
            "2025-04-05",
            "--end",
            "2025-04-01",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Warning: Invalid date range"));
}

#[test]
fn test_cli_plan_missing_end_date() {
    homestead_cmd()
        .args(["plan", "turkey chicks", "--start", "2025-04-05"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "both a start date and an end date are required",
        ));
}

#[test]
fn test_cli_plan_zero_quantity() {
    homestead_cmd()
        .args([
            "plan",
            "chicken chicks",
            "--start",
            "2025-04-01",
            "--end",
            "2025-04-02",
            "--quantity",
            "0",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Warning: Invalid quantity 0"));
}

#[test]
fn test_cli_plan_negative_quantity() {
    homestead_cmd()
        .args([
            "plan",
            "chicken chicks",
            "--start",
            "2025-04-01",
            "--end",
            "2025-04-02",
            "-q",
            "-4",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Warning: Invalid quantity -4"));
}

#[test]
fn test_cli_plan_malformed_date() {
    homestead_cmd()
        .args(["plan", "chicken chicks", "--start", "2025-13-40", "--end", "2025-04-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start"));
}

#[test]
fn test_cli_plan_default_range_and_quantity_from_settings() {
    let (_temp_dir, config) =
        create_settings_file(r#"{"lead_days": 0, "range_days": 2, "quantity": 8}"#);

    homestead_cmd()
        .args(["--config-file", &config, "plan", "kunekune pigs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan: 8 Kunekune Pigs"))
        .stdout(predicate::str::contains("- **Total Feed Needed**: 5200 lbs"))
        .stdout(predicate::str::contains("- **300lb Barrels**: 18"));
}

#[test]
fn test_cli_reads_settings_from_xdg_config_home() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let app_dir = temp_dir.path().join("homestead");
    fs::create_dir_all(&app_dir).expect("Failed to create settings directory");
    fs::write(app_dir.join("config.json"), r#"{"quantity": 8}"#)
        .expect("Failed to write settings");

    homestead_cmd()
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .args(["plan", "kunekune pigs", "--start", "2025-01-01", "--end", "2025-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan: 8 Kunekune Pigs"));
}

#[test]
fn test_cli_without_settings_file_uses_defaults() {
    homestead_cmd()
        .args(["plan", "kunekune pigs", "--start", "2025-01-01", "--end", "2025-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan: 1 Kunekune Pigs"))
        .stdout(predicate::str::contains("- **Total Feed Needed**: 650 lbs"));
}

#[test]
fn test_cli_invalid_settings_file() {
    let (_temp_dir, config) = create_settings_file(r#"{"lead_days": -3}"#);

    homestead_cmd()
        .args(["--config-file", &config, "species"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_cli_species_listing() {
    homestead_cmd()
        .arg("species")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Species"))
        .stdout(predicate::str::contains("| chicken eggs | 21 days | 8 weeks | 15 lbs |"))
        .stdout(predicate::str::contains("| kunekune pigs | 116 days | 52 weeks | 650 lbs |"));
}

#[test]
fn test_cli_no_command_lists_species() {
    homestead_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("turkey chicks"));
}

#[test]
fn test_cli_plan_alias() {
    homestead_cmd()
        .args(["p", "chicken chicks", "--start", "2025-06-01", "--end", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting around 2025-07-27"));
}
