//! Integration tests for `classify`, `attributes`, `init` and global flags.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn help_lists_subcommands() {
    choropleth!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("attributes"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn missing_subcommand_fails() {
    choropleth!().assert().failure();
}

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = TestFixture::with_inputs();

    choropleth!()
        .current_dir(fixture.path())
        .args(["-v", "--no-config", "render", "data.csv", "countries.geojson", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("Session ready"));
}

// =============================================================================
// Classify
// =============================================================================

#[test]
fn classify_text_shows_legend_and_records() {
    let fixture = TestFixture::with_inputs();

    choropleth!()
        .current_dir(fixture.path())
        .args(["--no-config", "classify", "data.csv", "-a", "Ukraine"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Quantile classes for Ukraine (2 values, 2 excluded)",
        ))
        .stdout(predicate::str::contains("Classes:"))
        .stdout(predicate::str::contains("Czechia"));
}

#[test]
fn classify_json_is_machine_readable() {
    let fixture = TestFixture::with_inputs();

    let output = choropleth!()
        .current_dir(fixture.path())
        .args(["--no-config", "classify", "data.csv", "-a", "Poland", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["attribute"], "Poland");
    assert_eq!(json["domain_size"], 3);
    assert_eq!(json["legend"].as_array().unwrap().len(), 5);
    assert_eq!(json["records"][0]["color_class"]["kind"], "fallback");
}

#[test]
fn classify_unknown_attribute_is_usage_error() {
    let fixture = TestFixture::with_inputs();

    choropleth!()
        .current_dir(fixture.path())
        .args(["--no-config", "classify", "data.csv", "-a", "Narnia"])
        .assert()
        .code(2);
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn attributes_marks_active_and_missing() {
    let fixture = TestFixture::with_inputs();

    choropleth!()
        .current_dir(fixture.path())
        .args(["--no-config", "attributes", "data.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* Russian Federation  (not in data)"))
        .stdout(predicate::str::contains("  Ukraine\n"));
}

#[test]
fn attributes_derived_from_headers() {
    let fixture = TestFixture::with_inputs();
    fixture.create_config("[attributes]\ncandidates = []\n");

    choropleth!()
        .current_dir(fixture.path())
        .args(["attributes", "data.csv"])
        .assert()
        .success()
        .stdout(predicate::eq("* Ukraine\n  Poland\n"));
}

// =============================================================================
// Init
// =============================================================================

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    choropleth!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.file(".choropleth.toml")).unwrap();
    assert!(content.contains("[classification]"));
    assert!(content.contains("duplicate_keys"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    choropleth!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites_and_is_loadable() {
    let fixture = TestFixture::with_inputs();
    fixture.create_config("# existing config\n");

    choropleth!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    choropleth!()
        .current_dir(fixture.path())
        .args(["render", "data.csv", "countries.geojson", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active attribute: Russian Federation"));
}
