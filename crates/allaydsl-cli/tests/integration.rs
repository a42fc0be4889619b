//! Integration tests for the allaydsl CLI
//!
//! These drive the library surface end to end: scaffold a project, parse
//! and validate its build script, break it, and apply a version edit.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use allaydsl_cli::app::{check_source, render_diagnostics, write_scaffold, OutputFormat};
use allaydsl_core::template::ProjectTemplate;
use allaydsl_core::{entrance_reference, parse};
use allaydsl_version::{declared_api_version, update_edit};

fn test_template() -> ProjectTemplate {
    ProjectTemplate {
        plugin_name: "IntegrationPlugin".to_string(),
        version: "1.2.3".to_string(),
        description: "Integration test plugin".to_string(),
        author: "it".to_string(),
        api_version: "0.14.0".to_string(),
        main_class: "Entry".to_string(),
        group_id: "org.example.it".to_string(),
    }
}

#[test]
fn scaffold_writes_expected_files() {
    let dir = TempDir::new().unwrap();
    write_scaffold(dir.path(), &test_template()).unwrap();

    for file in [
        "build.gradle.kts",
        "settings.gradle.kts",
        "gradle.properties",
        "src/main/java/org/example/it/Entry.java",
    ] {
        assert!(dir.path().join(file).exists(), "missing {file}");
    }
    assert!(dir.path().join("src/main/resources").is_dir());
}

#[test]
fn scaffolded_build_script_is_clean() {
    let dir = TempDir::new().unwrap();
    write_scaffold(dir.path(), &test_template()).unwrap();

    let source = fs::read_to_string(dir.path().join("build.gradle.kts")).unwrap();
    let diagnostics = check_source(&source);
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
}

#[test]
fn scaffolded_build_script_declares_api_version() {
    let source = test_template().build_gradle_kts();
    let file = parse(&source);
    let (version, _) = declared_api_version(&file).unwrap();
    assert_eq!(version, "0.14.0");
}

#[test]
fn scaffolded_entrance_is_referenced() {
    let source = test_template().build_gradle_kts();
    let reference = entrance_reference(&parse(&source)).unwrap();
    assert_eq!(reference.class_name, ".Entry");
}

#[test]
fn removing_required_properties_fails_check() {
    let source = test_template()
        .build_gradle_kts()
        .replace("entrance = \".Entry\"\n", "");
    let diagnostics = check_source(&source);
    assert!(diagnostics.iter().any(|d| d.is_error()));
    assert!(diagnostics
        .iter()
        .any(|d| d.message.contains("'entrance'")));
}

#[test]
fn version_edit_round_trips_through_the_file() {
    let dir = TempDir::new().unwrap();
    write_scaffold(dir.path(), &test_template()).unwrap();
    let path = dir.path().join("build.gradle.kts");

    let source = fs::read_to_string(&path).unwrap();
    let file = parse(&source);
    let edit = update_edit(&file, "0.15.0").unwrap();
    fs::write(&path, edit.apply(&source)).unwrap();

    let updated = fs::read_to_string(&path).unwrap();
    let (version, _) = declared_api_version(&parse(&updated)).unwrap();
    assert_eq!(version, "0.15.0");
    // Only the api line changed
    assert!(updated.contains("version = \"1.2.3\""));
    assert!(updated.contains("api = \">= 0.14.0\""));
}

#[test]
fn json_output_carries_codes_and_severities() {
    let diagnostics = check_source("allay {\n    plugin {\n    }\n}\n");
    let rendered = render_diagnostics(
        &diagnostics,
        Path::new("build.gradle.kts"),
        OutputFormat::Json,
    );
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let entries = parsed.as_array().unwrap();

    // ALY101 warning plus three required-property errors
    assert_eq!(entries.len(), 4);
    assert!(entries
        .iter()
        .any(|e| e["code"] == "ALY101" && e["severity"] == "warning"));
    assert!(entries
        .iter()
        .any(|e| e["code"] == "ALY201" && e["severity"] == "error"));
}
