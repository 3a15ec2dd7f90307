//! Integration tests for export and import commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::spendlog_cmd;

fn init_ledger(temp: &TempDir) {
    spendlog_cmd().arg("init").arg(temp.path()).assert().success();
}

fn seed_ledger(temp: &TempDir) {
    spendlog_cmd()
        .current_dir(temp.path())
        .args(["add", "category", "c1", "Circles"])
        .args(["--color", "rgb(189, 84, 84)"])
        .assert()
        .success();
    spendlog_cmd()
        .current_dir(temp.path())
        .args(["add", "company", "co1", "Cube", "cir"])
        .assert()
        .success();
    spendlog_cmd()
        .current_dir(temp.path())
        .args(["add", "item", "Bread", "3.2", "cub"])
        .assert()
        .success();
}

#[test]
fn test_export_uses_default_file_name() {
    let temp = TempDir::new().unwrap();
    init_ledger(&temp);
    seed_ledger(&temp);

    spendlog_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkout_data.json"));

    assert!(temp.path().join("checkout_data.json").exists());
}

#[test]
fn test_export_writes_reference_by_key_document() {
    let temp = TempDir::new().unwrap();
    init_ledger(&temp);
    seed_ledger(&temp);

    let target = temp.path().join("backup.json");
    spendlog_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg(&target)
        .assert()
        .success();

    let text = fs::read_to_string(&target).unwrap();
    assert!(text.contains("\"categories\""));
    assert!(text.contains("\"companies\""));
    assert!(text.contains("\"items\""));
    // References are stored by key, not embedded
    assert!(text.contains("\"category\": \"c1\""));
    assert!(text.contains("\"company\": \"co1\""));
}

#[test]
fn test_export_then_import_into_fresh_ledger() {
    let source_ledger = TempDir::new().unwrap();
    init_ledger(&source_ledger);
    seed_ledger(&source_ledger);

    let exported = source_ledger.path().join("backup.json");
    spendlog_cmd()
        .current_dir(source_ledger.path())
        .arg("export")
        .arg(&exported)
        .assert()
        .success();

    // A brand-new ledger picks up the whole data set
    let fresh = TempDir::new().unwrap();
    init_ledger(&fresh);

    spendlog_cmd()
        .current_dir(fresh.path())
        .arg("import")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 1 categories, 1 companies, 1 items",
        ));

    spendlog_cmd()
        .current_dir(fresh.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("(Cube)"));

    spendlog_cmd()
        .current_dir(fresh.path())
        .arg("list")
        .arg("companies")
        .assert()
        .success()
        .stdout(predicate::str::contains("co1  Cube  [Circles]"));
}

#[test]
fn test_import_rejects_unsupported_file_type() {
    let temp = TempDir::new().unwrap();
    init_ledger(&temp);

    let source = temp.path().join("data.pdf");
    fs::write(&source, "{}").unwrap();

    spendlog_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&source)
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn test_import_malformed_document_keeps_previous_data() {
    let temp = TempDir::new().unwrap();
    init_ledger(&temp);
    seed_ledger(&temp);

    let source = temp.path().join("broken.json");
    fs::write(&source, "{ not json").unwrap();

    spendlog_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&source)
        .assert()
        .failure();

    // Previous data still listed
    spendlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"));
}

#[test]
fn test_import_dangling_reference_fails() {
    let temp = TempDir::new().unwrap();
    init_ledger(&temp);

    let source = temp.path().join("dangling.json");
    fs::write(
        &source,
        r#"{
            "categories": [],
            "companies": [],
            "items": [ { "id": null, "name": "Bread", "description": null, "price": 3.2, "timestamp": 0, "company": "co9" } ]
        }"#,
    )
    .unwrap();

    spendlog_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&source)
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Unknown company key: 'co9'"));
}
