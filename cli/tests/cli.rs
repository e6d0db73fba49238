use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn vedanco() -> Command {
    let mut cmd = Command::cargo_bin("vedanco").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("CONTACT_SCRIPT_URL")
        .env_remove("API_KEY")
        .env_remove("GEMINI_API_KEY");
    cmd
}

/// A config file that sets nothing, so no user or project config is read
fn empty_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, "{}").unwrap();
    path
}

#[test]
fn resolve_business_leaf_deep_links() {
    vedanco()
        .args(["resolve", "Vedanco Air"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BUSINESS#vedanco-air"));
}

#[test]
fn resolve_unknown_label_falls_back_home() {
    vedanco()
        .args(["resolve", "Nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::diff("HOME\n"));
}

#[test]
fn resolve_portfolio_leaf_has_no_section() {
    vedanco()
        .args(["resolve", "--json", "Case Studies"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""view":"PORTFOLIO""#))
        .stdout(predicate::str::contains(r#""section":null"#));
}

#[test]
fn menu_lists_leaf_targets_and_footer_links() {
    vedanco()
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("ABOUT#leadership"))
        .stdout(predicate::str::contains("SOLUTIONS#digital-transformation"))
        .stdout(predicate::str::contains("LEGAL#cookies"));
}

#[test]
fn contact_without_endpoint_reports_configuration_error() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);

    vedanco()
        .arg("--config")
        .arg(&config)
        .args(["contact", "--no-input", "--first-name", "Asha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONTACT_SCRIPT_URL"));
}

#[test]
fn contact_rejects_unknown_subject() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);

    vedanco()
        .arg("--config")
        .arg(&config)
        .args(["contact", "--no-input", "--subject", "Lottery"])
        .assert()
        .failure();
}

#[test]
fn genai_without_key_reports_missing_credential() {
    let dir = TempDir::new().unwrap();
    let config = empty_config(&dir);

    vedanco()
        .arg("--config")
        .arg(&config)
        .args(["genai", "analyze", "Describe Vedanco Group"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API_KEY"));
}
