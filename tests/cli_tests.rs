//! CLI command handler tests

use poxls::cli::commands;
use poxls::types::{CommentKind, ExportOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NL_PO: &str = r#"msgid ""
msgstr ""
"Language: nl\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

#: src/app.rs:12
msgid "Hello world"
msgstr "Hallo wereld"

msgctxt "menu"
msgid "Open"
msgstr "Openen"
"#;

const FR_PO: &str = r#"msgid ""
msgstr ""
"Language: fr\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

msgid "Hello world"
msgstr "Bonjour le monde"
"#;

fn write_po(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn spec(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPORT COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_basic() {
    let dir = TempDir::new().unwrap();
    let nl = write_po(&dir, "nl.po", NL_PO);
    let output = dir.path().join("messages.xlsx");

    let result = commands::export(
        &[spec(&nl)],
        &output,
        &[CommentKind::Notes],
        ExportOptions::default(),
        false,
    );
    assert!(result.is_ok(), "Export should succeed on a valid catalog");
    assert!(output.exists());
}

#[test]
fn test_export_multiple_catalogs_verbose() {
    let dir = TempDir::new().unwrap();
    let nl = write_po(&dir, "nl.po", NL_PO);
    let fr = write_po(&dir, "fr.po", FR_PO);
    let output = dir.path().join("messages.xlsx");

    let result = commands::export(
        &[spec(&nl), spec(&fr)],
        &output,
        &[CommentKind::All],
        ExportOptions::default(),
        true,
    );
    assert!(result.is_ok(), "Export verbose should succeed");
    assert!(output.exists());
}

#[test]
fn test_export_nonexistent_catalog() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("messages.xlsx");

    let result = commands::export(
        &["nonexistent.po".to_string()],
        &output,
        &[],
        ExportOptions::default(),
        false,
    );
    assert!(result.is_err(), "Export should fail on a missing catalog");
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORT COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let nl = write_po(&dir, "nl.po", NL_PO);
    let workbook = dir.path().join("messages.xlsx");

    commands::export(
        &[spec(&nl)],
        &workbook,
        &[CommentKind::All],
        ExportOptions::default(),
        false,
    )
    .unwrap();

    let output = dir.path().join("imported.po");
    let result = commands::import("nl", &workbook, &output, true, true);
    assert!(result.is_ok(), "Import should succeed on exported workbook");

    let imported = fs::read_to_string(&output).unwrap();
    assert!(imported.contains("Hallo wereld"));
    assert!(imported.contains("msgctxt \"menu\""));
}

#[test]
fn test_import_unknown_locale_fails() {
    let dir = TempDir::new().unwrap();
    let nl = write_po(&dir, "nl.po", NL_PO);
    let workbook = dir.path().join("messages.xlsx");

    commands::export(
        &[spec(&nl)],
        &workbook,
        &[],
        ExportOptions::default(),
        false,
    )
    .unwrap();

    // No "de" column anywhere, so no messages can be recovered.
    let output = dir.path().join("de.po");
    let result = commands::import("de", &workbook, &output, true, false);
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_import_nonexistent_workbook() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nl.po");

    let result = commands::import("nl", Path::new("nonexistent.xlsx"), &output, true, false);
    assert!(result.is_err(), "Import should fail on a missing workbook");
}
