//! End-to-end tests for the `md` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TRANSCRIPT: &str = "\
Client triggers operation A.
Component 1 does A.
Mediator reacts on A and triggers following operations:
Component 2 does C.

Client triggers operation D.
Component 2 does D.
Mediator reacts on D and triggers following operations:
Component 1 does B.
Component 2 does C.
";

/// Run `md` in an empty directory so no stray config file is picked up
fn md(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("md").expect("binary should build");
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_full_transcript() {
    let temp = TempDir::new().unwrap();
    md(&temp).assert().success().stdout(TRANSCRIPT);
}

#[test]
fn test_logging_stays_off_stdout() {
    let temp = TempDir::new().unwrap();
    md(&temp)
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stdout(TRANSCRIPT)
        .stderr(predicate::str::contains("ConcreteMediator::notify"));
}

#[test]
fn test_run_single_event() {
    let temp = TempDir::new().unwrap();
    md(&temp).args(["run", "b"]).assert().success().stdout(
        "Client triggers operation B.\n\
         Component 1 does B.\n",
    );
}

#[test]
fn test_run_uses_scenario_from_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.yml");
    std::fs::write(&config, "scenario: [C, A]\n").unwrap();

    md(&temp)
        .args(["--config", config.to_str().unwrap(), "run"])
        .assert()
        .success()
        .stdout(
            "Client triggers operation C.\n\
             Component 2 does C.\n\
             \n\
             Client triggers operation A.\n\
             Component 1 does A.\n\
             Mediator reacts on A and triggers following operations:\n\
             Component 2 does C.\n",
        );
}

#[test]
fn test_local_config_file_is_found() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("mediator-demo.yml"), "scenario: [D]\n").unwrap();

    md(&temp)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Client triggers operation D.\n"))
        .stdout(predicate::str::contains("operation A").not());
}

#[test]
fn test_bare_command_ignores_configured_scenario() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("mediator-demo.yml"), "scenario: [B]\n").unwrap();
    let config_dir = temp.path().join("mediator-demo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.yml"), "scenario: [C]\n").unwrap();

    md(&temp).assert().success().stdout(TRANSCRIPT);
}

#[test]
fn test_loaded_config_is_logged() {
    let temp = TempDir::new().unwrap();
    md(&temp)
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("main: config="));
}

#[test]
fn test_rules() {
    let temp = TempDir::new().unwrap();
    md(&temp)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C"))
        .stdout(predicate::str::contains("D -> B, C"))
        .stdout(predicate::str::contains("B -> (no reaction)"));
}

#[test]
fn test_unknown_event_rejected() {
    let temp = TempDir::new().unwrap();
    md(&temp)
        .args(["run", "Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown event"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();
    md(&temp)
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_bad_log_level_fails() {
    let temp = TempDir::new().unwrap();
    md(&temp)
        .args(["--log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown log level"));
}
