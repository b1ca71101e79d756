use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{psm, setup_test_config};

#[test]
fn test_summary_with_detected_lunch_break() {
    let cfg = setup_test_config("summary_lunch_detected");

    psm()
        .args([
            "--config", &cfg, "summary", "09:00", "12:30", "13:15", "17:39", "--now", "18:00",
        ])
        .assert()
        .success()
        .stdout(contains("Period 1: 09:00 - 12:30 = 3h 30m"))
        .stdout(contains("Period 2: 13:15 - 17:39 = 4h 24m"))
        .stdout(contains("Lunch break: detected 12:30 - 13:15 (0h 45m)"))
        .stdout(contains("Total worked:"))
        .stdout(contains("7h 54m"))
        .stdout(contains("Surplus:"))
        .stdout(contains("+0h 30m"))
        .stdout(contains("Daily work target completed!"));
}

#[test]
fn test_summary_clocked_in_projection() {
    let cfg = setup_test_config("summary_clocked_in");

    psm()
        .args(["--config", &cfg, "summary", "09:00", "--now", "09:00"])
        .assert()
        .success()
        .stdout(contains("Clock out at 16:24 to reach 7h 24m"))
        .stdout(contains("Remaining: 7h 24m of work"))
        .stdout(contains("Currently clocked in since 09:00"));
}

#[test]
fn test_summary_assumed_lunch_break() {
    let cfg = setup_test_config("summary_assumed_lunch");

    // Two periods, no midday gap in the window: the 45m minimum is assumed
    psm()
        .args([
            "--config", &cfg, "summary", "07:00", "09:00", "09:10", "15:00", "--now", "15:30",
        ])
        .assert()
        .success()
        .stdout(contains("Lunch break: not detected - minimum 0h 45m assumed"));
}

#[test]
fn test_summary_unsorted_punches_are_reordered() {
    let cfg = setup_test_config("summary_unsorted");

    psm()
        .args([
            "--config", &cfg, "summary", "13:15", "09:00", "17:39", "12:30", "--now", "18:00",
        ])
        .assert()
        .success()
        .stdout(contains("Period 1: 09:00 - 12:30 = 3h 30m"))
        .stdout(contains("Period 2: 13:15 - 17:39 = 4h 24m"));
}

#[test]
fn test_summary_without_punches_is_neutral() {
    let cfg = setup_test_config("summary_empty");

    psm()
        .args(["--config", &cfg, "summary"])
        .assert()
        .success()
        .stdout(contains("nothing to compute"));

    // Unparsable labels are dropped, leaving the same neutral state
    psm()
        .args(["--config", &cfg, "summary", "morning", "late"])
        .assert()
        .success()
        .stdout(contains("nothing to compute"));
}

#[test]
fn test_summary_json_output() {
    let cfg = setup_test_config("summary_json");

    let output = psm()
        .args([
            "--config", &cfg, "summary", "09:00", "10:00", "--json", "--now", "12:00",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).expect("utf8 stdout");
    let v: serde_json::Value = serde_json::from_str(text.trim()).expect("valid JSON");

    assert_eq!(v["timeline"]["total_worked_minutes"], 60);
    assert_eq!(v["projection"]["status"], "clocked_out");
    assert_eq!(v["projection"]["remaining_minutes"], 444 - 60 + 45);
    assert_eq!(v["punches"][0]["time"], "09:00");
}

#[test]
fn test_summary_target_override_not_persisted() {
    let cfg = setup_test_config("summary_target_override");

    psm()
        .args([
            "--config", &cfg, "summary", "09:00", "17:24", "--target", "8:00", "--now", "18:00",
        ])
        .assert()
        .success()
        .stdout(contains("+0h 24m"))
        .stdout(contains("Still 0h 21m of work remaining"));

    // The override must not have touched the stored target
    psm()
        .args(["--config", &cfg, "target", "--show"])
        .assert()
        .success()
        .stdout(contains("7h 24m"));
}

#[test]
fn test_summary_rejects_invalid_now() {
    let cfg = setup_test_config("summary_bad_now");

    psm()
        .args(["--config", &cfg, "summary", "09:00", "--now", "9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_summary_details_table() {
    let cfg = setup_test_config("summary_details");

    psm()
        .args([
            "--config", &cfg, "summary", "12:00", "09:00", "--details", "--now", "13:00",
        ])
        .assert()
        .success()
        .stdout(contains("Punch"))
        .stdout(contains("Source pos"))
        .stdout(contains("Period 1: 09:00 - 12:00 = 3h 00m"));
}

#[test]
fn test_summary_exceeded_target() {
    let cfg = setup_test_config("summary_exceeded");

    psm()
        .args([
            "--config", &cfg, "summary", "07:00", "12:00", "12:45", "18:00", "18:30", "--now",
            "23:00",
        ])
        .assert()
        .success()
        .stdout(contains("Daily work target already exceeded!"))
        .stdout(contains("Remaining").not());
}
