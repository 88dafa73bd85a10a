//! Integration tests for the `scan`, `file` and `lines` subcommands.

mod common;

use assert_cmd::Command;
use common::{intake_form, write_file};
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdfaddr").unwrap()
}

/// Root with two dated case folders, an unreadable one, and an empty one.
fn intake_tree() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    write_file(
        root.path(),
        "NLP 1.2.3/form.pdf",
        &intake_form("Ann Lee Medical Group", "555 Bay St Unit 7", "Tampa, FL 33601"),
    );
    write_file(
        root.path(),
        "CD 4.5.6/form.pdf",
        &intake_form("John Smith MRN 4821", "456 Oak Ave", "Springfield, IL 62704"),
    );
    write_file(root.path(), "zz broken/form.pdf", b"not really a pdf");
    std::fs::create_dir(root.path().join("CD empty")).unwrap();
    root
}

#[test]
fn scan_writes_csv_in_folder_order() {
    let root = intake_tree();
    let out = root.path().join("addresses.csv");

    cmd()
        .arg("scan")
        .arg(root.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Spreadsheet created at"))
        .stderr(predicate::str::contains(
            "3 document(s): 2 with address, 0 without address, 1 unreadable",
        ));

    let csv = std::fs::read_to_string(&out).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(
        rows[0],
        "Name,Address Line 1,Address Line 2,City,State,ZIP Code,File Name"
    );
    assert!(rows[1].starts_with("John Smith,456 Oak Ave,,Springfield,IL,62704,"));
    assert!(rows[1].ends_with("form.pdf"));
    assert!(rows[2].starts_with("Ann Lee,555 Bay St,Unit 7,Tampa,FL,33601,"));
    assert!(rows[3].starts_with("NOT FOUND,NOT FOUND,NOT FOUND,NOT FOUND,NOT FOUND,NOT FOUND,"));
    assert_eq!(rows.len(), 4);
}

#[test]
fn scan_writes_json() {
    let root = intake_tree();
    let out = root.path().join("addresses.json");

    cmd()
        .arg("scan")
        .arg(root.path())
        .args(["--format", "json", "-o"])
        .arg(&out)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["City"], "Springfield");
    assert_eq!(rows[1]["Address Line 2"], "Unit 7");
    assert_eq!(rows[2]["ZIP Code"], "NOT FOUND");
}

#[test]
fn scan_empty_root_writes_header_only() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("addresses.csv");

    cmd()
        .arg("scan")
        .arg(root.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("no PDF documents found"));

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "Name,Address Line 1,Address Line 2,City,State,ZIP Code,File Name\n"
    );
}

#[test]
fn scan_unwritable_output_fails() {
    let root = intake_tree();
    cmd()
        .arg("scan")
        .arg(root.path())
        .args(["-o", "/nonexistent/dir/out.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn file_prints_records_in_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(
        dir.path(),
        "a.pdf",
        &intake_form("Jane Roe", "321 Pine Rd", "Boise, ID 83702-1234"),
    );
    let missing = dir.path().join("missing.pdf");

    cmd()
        .arg("file")
        .arg(&missing)
        .arg(&a)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NOT FOUND,NOT FOUND,NOT FOUND,NOT FOUND,NOT FOUND,NOT FOUND,",
        ))
        .stdout(predicate::str::contains(
            "Jane Roe,321 Pine Rd,,Boise,ID,83702-1234,",
        ));
}

#[test]
fn file_text_format_is_tab_separated() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(
        dir.path(),
        "a.pdf",
        &intake_form("Jane Roe", "321 Pine Rd", "Boise, ID 83702"),
    );

    cmd()
        .arg("file")
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name\tAddress Line 1"))
        .stdout(predicate::str::contains("Jane Roe\t321 Pine Rd\t\tBoise\tID\t83702\t"));
}

#[test]
fn lines_shows_body_and_qualifying_index() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(
        dir.path(),
        "a.pdf",
        &intake_form("Jane Roe", "321 Pine Rd", "Boise, ID 83702"),
    );

    cmd()
        .arg("lines")
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Clinic Intake").not())
        .stdout(predicate::str::contains("  0  Patient Record"))
        .stdout(predicate::str::contains("--- qualifying City line: 3 ---"));
}

#[test]
fn lines_unreadable_pdf_fails() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_file(dir.path(), "bad.pdf", b"garbage");

    cmd()
        .arg("lines")
        .arg(&bad)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read PDF"));
}
