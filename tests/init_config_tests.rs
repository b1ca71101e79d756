use predicates::str::contains;
use std::fs;

mod common;
use common::{psm, setup_test_config};

#[test]
fn test_init_creates_config_file() {
    let cfg = setup_test_config("init_creates");

    psm()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Daily target: 7h 24m"))
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("target_hours: 7"));
    assert!(content.contains("target_minutes: 24"));
    assert!(content.contains("lunch_window:"));
    assert!(content.contains("11:30-14:15"));
}

#[test]
fn test_init_test_mode_skips_write() {
    let cfg = setup_test_config("init_test_mode");

    psm()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();

    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_init_keeps_existing_config() {
    let cfg = setup_test_config("init_keeps");

    psm()
        .args(["--config", &cfg, "target", "6:30"])
        .assert()
        .success();

    psm().args(["--config", &cfg, "init"]).assert().success();

    // A second init must not reset the stored target
    psm()
        .args(["--config", &cfg, "target", "--show"])
        .assert()
        .success()
        .stdout(contains("6h 30m"));
}

#[test]
fn test_config_print() {
    let cfg = setup_test_config("config_print");

    psm()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("target_hours: 7"))
        .stdout(contains("11:30-14:15"));
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let cfg = setup_test_config("config_partial");

    // Older config files may miss newer fields; defaults must kick in
    fs::write(&cfg, "target_hours: 8\ntarget_minutes: 0\n").expect("seed config");

    psm()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("target_hours: 8"))
        .stdout(contains("11:30-14:15"));
}

#[test]
fn test_bad_lunch_window_is_reported() {
    let cfg = setup_test_config("config_bad_window");

    fs::write(&cfg, "lunch_window: noonish\n").expect("seed config");

    psm()
        .args(["--config", &cfg, "summary", "09:00", "--now", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid lunch window"));
}
