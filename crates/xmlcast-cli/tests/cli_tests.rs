use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const CATALOG_XML: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
    <tours>\n\
      <tour id=\"1\"><name>Alps</name><days>7</days></tour>\n\
      <tour id=\"2\"><name>Andes</name><days>12</days></tour>\n\
    </tours>\n";

fn xmlcast(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("xmlcast").expect("binary builds");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_default_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tours.xml"), CATALOG_XML).unwrap();

    xmlcast(dir.path()).assert().success().stdout("");

    let json = fs::read_to_string(dir.path().join("tours.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tours"]["tour"][0]["name"], "Alps");
    assert_eq!(value["tours"]["tour"][1]["@id"], "2");
}

#[test]
fn test_explicit_input_derives_output_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("catalog.xml"), CATALOG_XML).unwrap();

    xmlcast(dir.path()).arg("catalog.xml").assert().success();

    assert!(dir.path().join("catalog.json").exists());
    assert!(!dir.path().join("tours.json").exists());
}

#[test]
fn test_output_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tours.xml"), CATALOG_XML).unwrap();

    xmlcast(dir.path())
        .args(["tours.xml", "--output", "out/converted.json"])
        .assert()
        .failure();

    fs::create_dir(dir.path().join("out")).unwrap();
    xmlcast(dir.path())
        .args(["tours.xml", "--output", "out/converted.json"])
        .assert()
        .success();
    assert!(dir.path().join("out/converted.json").exists());
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempdir().unwrap();

    xmlcast(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));

    assert!(!dir.path().join("tours.json").exists());
}

#[test]
fn test_malformed_input_fails_without_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tours.xml"), "<tours><tour>Alps</tours>").unwrap();

    xmlcast(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to convert"));

    assert!(!dir.path().join("tours.json").exists());
}

#[test]
fn test_malformed_input_leaves_previous_output_untouched() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tours.json"), "{\"previous\": true}").unwrap();
    fs::write(dir.path().join("tours.xml"), "<tours><broken></tours>").unwrap();

    xmlcast(dir.path()).assert().failure();

    let json = fs::read_to_string(dir.path().join("tours.json")).unwrap();
    assert_eq!(json, "{\"previous\": true}");
}

#[test]
fn test_output_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tours.xml"), CATALOG_XML).unwrap();

    xmlcast(dir.path()).assert().success();
    let first = fs::read(dir.path().join("tours.json")).unwrap();

    xmlcast(dir.path()).assert().success();
    let second = fs::read(dir.path().join("tours.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_output_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tours.json"), "stale content that is longer").unwrap();
    fs::write(dir.path().join("tours.xml"), "<tours/>").unwrap();

    xmlcast(dir.path()).assert().success();

    let json = fs::read_to_string(dir.path().join("tours.json")).unwrap();
    assert_eq!(json, "{\n  \"tours\": null\n}");
}

#[test]
fn test_non_ascii_written_literally() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("tours.xml"),
        "<tours><tour>Café de Flore</tour></tours>",
    )
    .unwrap();

    xmlcast(dir.path()).assert().success();

    let json = fs::read_to_string(dir.path().join("tours.json")).unwrap();
    assert!(json.contains("Café de Flore"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_custom_indent() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tours.xml"), "<tours><tour>Alps</tour></tours>").unwrap();

    xmlcast(dir.path()).args(["--indent", "4"]).assert().success();

    let json = fs::read_to_string(dir.path().join("tours.json")).unwrap();
    assert_eq!(json, "{\n    \"tours\": {\n        \"tour\": \"Alps\"\n    }\n}");
}
