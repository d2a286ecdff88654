use assert_cmd::Command;
use predicates::prelude::*;

fn specfilter(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("specfilter").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir);
    cmd
}

#[test]
fn demo_runs_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    specfilter(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("language=ENGLISH OR continent=AFRICA"))
        .stdout(predicate::str::contains("England"))
        .stdout(predicate::str::contains("Egypt"))
        .stdout(predicate::str::contains("language=GERMAN AND continent=EUROPE"))
        .stdout(predicate::str::contains("Austria"));
}

#[test]
fn list_shows_all_countries() {
    let temp_dir = tempfile::tempdir().unwrap();

    specfilter(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("England"))
        .stdout(predicate::str::contains("Germany"))
        .stdout(predicate::str::contains("Egypt"))
        .stdout(predicate::str::contains("Austria"));
}

#[test]
fn filter_all_terms() {
    let temp_dir = tempfile::tempdir().unwrap();

    specfilter(temp_dir.path())
        .args(["filter", "language=german", "continent=europe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Germany"))
        .stdout(predicate::str::contains("Austria"))
        .stdout(predicate::str::contains("England").not())
        .stdout(predicate::str::contains("2 of 4 countries match (all)"));
}

#[test]
fn filter_any_term() {
    let temp_dir = tempfile::tempdir().unwrap();

    specfilter(temp_dir.path())
        .args(["filter", "--any", "language=english", "continent=africa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("England"))
        .stdout(predicate::str::contains("Egypt"))
        .stdout(predicate::str::contains("Germany").not());
}

#[test]
fn filter_uses_configured_combinator() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"combinator":"any"}"#,
    )
    .unwrap();

    specfilter(temp_dir.path())
        .args(["filter", "language=english", "continent=africa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 4 countries match (any)"));

    specfilter(temp_dir.path())
        .args(["filter", "--all", "language=english", "continent=africa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No countries match"));
}

#[test]
fn filter_reads_countries_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"countries":[{"name":"Japan","continent":"ASIA","language":"ENGLISH"}]}"#,
    )
    .unwrap();

    specfilter(temp_dir.path())
        .args(["filter", "continent=asia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Japan"))
        .stdout(predicate::str::contains("1 of 1 countries match"));
}

#[test]
fn unknown_attribute_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    specfilter(temp_dir.path())
        .args(["filter", "population=large"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown attribute: population"));
}

#[test]
fn filter_requires_terms() {
    let temp_dir = tempfile::tempdir().unwrap();

    specfilter(temp_dir.path())
        .arg("filter")
        .assert()
        .failure();
}
