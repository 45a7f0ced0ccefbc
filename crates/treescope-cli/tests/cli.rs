use assert_cmd::Command;
use predicates::prelude::*;

fn treescope() -> Command {
    Command::cargo_bin("treescope").expect("binary builds")
}

#[test]
fn help_lists_the_options() {
    treescope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--page-margin"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_flag_works() {
    treescope()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treescope"));
}

#[test]
fn missing_file_is_an_error() {
    treescope()
        .arg("/no/such/file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn unknown_extension_needs_an_explicit_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    std::fs::write(&path, "{}").unwrap();

    treescope()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn refuses_to_run_without_a_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ok.json");
    std::fs::write(&path, "{\"a\": 1}").unwrap();

    // Captured stdout is a pipe, so the interactive gate must trip
    // before the document is read.
    treescope()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn invalid_format_value_is_rejected_by_clap() {
    treescope()
        .args(["--format", "yaml", "file.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn bad_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "page_margin = \"many\"\n").unwrap();
    let data = dir.path().join("ok.json");
    std::fs::write(&data, "{}").unwrap();

    treescope()
        .arg(&data)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
