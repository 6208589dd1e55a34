//! Workbook reader: .xlsx → translation rows

use crate::error::PoxlsResult;
use crate::schema::HeaderMap;
use crate::types::{headers, TranslationRow};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Everything recovered from one workbook for a single locale.
///
/// Warnings carry the "skip malformed row" details so the CLI can surface
/// them without the importer printing anything itself.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub rows: Vec<TranslationRow>,
    pub warnings: Vec<String>,
}

/// Reads translation rows for one locale back out of a workbook.
///
/// Every sheet is scanned: the header row recovers the column mapping by
/// name, then each data row is reconstructed. Sheets without a msgid or
/// locale column are reported and skipped.
pub struct XlsxImporter {
    path: PathBuf,
    locale: String,
}

impl XlsxImporter {
    pub fn new<P: AsRef<Path>>(path: P, locale: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            locale: locale.to_string(),
        }
    }

    pub fn import(&self) -> PoxlsResult<ImportReport> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;
        let mut report = ImportReport::default();

        let sheet_names = workbook.sheet_names().to_vec();
        for sheet_name in sheet_names {
            match workbook.worksheet_range(&sheet_name) {
                Ok(range) => self.process_sheet(&sheet_name, &range, &mut report),
                Err(err) => report
                    .warnings
                    .push(format!("Sheet {}: could not be read ({})", sheet_name, err)),
            }
        }

        Ok(report)
    }

    fn process_sheet(&self, sheet_name: &str, range: &Range<Data>, report: &mut ImportReport) {
        let mut rows = range.rows();

        let header_row: Vec<String> = match rows.next() {
            Some(cells) => cells.iter().map(cell_text).collect(),
            None => return, // empty sheet
        };

        let map = HeaderMap::parse(&header_row, &self.locale);

        let msgid_col = match map.msgid {
            Some(col) => col,
            None => {
                report.warnings.push(format!(
                    "Sheet {}: could not find a \"{}\" column",
                    sheet_name,
                    headers::MESSAGE_ID
                ));
                return;
            }
        };
        let locale_col = match map.locale {
            Some(col) => col,
            None => {
                report.warnings.push(format!(
                    "Sheet {}: could not find a \"{}\" column",
                    sheet_name, self.locale
                ));
                return;
            }
        };

        for (idx, cells) in rows.enumerate() {
            let msgid = match cells.get(msgid_col) {
                Some(cell) if !matches!(cell, Data::Empty) => cell_text(cell),
                _ => continue, // row without a message id
            };
            if msgid.is_empty() {
                continue;
            }

            let msgstr = match cells.get(locale_col) {
                Some(Data::Empty) | None => String::new(),
                Some(cell @ Data::String(_)) => cell_text(cell),
                Some(cell) => {
                    // Spreadsheets love turning "1.0" into a number.
                    report.warnings.push(format!(
                        "Sheet {} row {}: coerced non-text translation for \"{}\"",
                        sheet_name,
                        idx + 2,
                        msgid
                    ));
                    cell_text(cell)
                }
            };

            report.rows.push(TranslationRow {
                msgctxt: optional_cell(cells, map.context),
                msgid,
                msgstr,
                comments: optional_cell(cells, map.comments),
                references: optional_cell(cells, map.references),
            });
        }
    }
}

/// A cell rendered as text; empty and error cells become "".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(d) => d.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

fn optional_cell(cells: &[Data], col: Option<usize>) -> Option<String> {
    let text = cell_text(cells.get(col?)?);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PoCatalog;
    use crate::excel::XlsxExporter;
    use crate::types::{CommentKind, ExportOptions};
    use pretty_assertions::assert_eq;
    use std::fs;
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

msgid "Untranslated"
msgstr ""
"#;

    fn export_fixture(dir: &TempDir) -> PathBuf {
        let po_path = dir.path().join("nl.po");
        fs::write(&po_path, NL_PO).unwrap();
        let nl = PoCatalog::open(po_path.to_str().unwrap()).unwrap();

        let exporter =
            XlsxExporter::new(vec![nl], &[CommentKind::All], ExportOptions::default());
        let xlsx_path = dir.path().join("messages.xlsx");
        exporter.export(&xlsx_path).unwrap();
        xlsx_path
    }

    #[test]
    fn test_import_round_trip() {
        let dir = TempDir::new().unwrap();
        let xlsx_path = export_fixture(&dir);

        let report = XlsxImporter::new(&xlsx_path, "nl").import().unwrap();
        assert!(report.warnings.is_empty());
        assert_eq!(report.rows.len(), 3);

        let hello = &report.rows[0];
        assert_eq!(hello.msgid, "Hello world");
        assert_eq!(hello.msgstr, "Hallo wereld");
        assert_eq!(hello.msgctxt, None);
        assert_eq!(hello.references.as_deref(), Some("src/app.rs:12"));

        let open = &report.rows[1];
        assert_eq!(open.msgctxt.as_deref(), Some("menu"));
        assert_eq!(open.msgstr, "Openen");

        assert_eq!(report.rows[2].msgstr, "");
    }

    #[test]
    fn test_import_unknown_locale_reports_sheet() {
        let dir = TempDir::new().unwrap();
        let xlsx_path = export_fixture(&dir);

        let report = XlsxImporter::new(&xlsx_path, "de").import().unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("\"de\" column"));
    }

    #[test]
    fn test_import_coerces_numeric_cell_with_warning() {
        let dir = TempDir::new().unwrap();
        let xlsx_path = dir.path().join("numeric.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, headers::MESSAGE_ID).unwrap();
        sheet.write_string(0, 1, "nl").unwrap();
        sheet.write_string(1, 0, "Version").unwrap();
        sheet.write_number(1, 1, 1.5).unwrap();
        workbook.save(&xlsx_path).unwrap();

        let report = XlsxImporter::new(&xlsx_path, "nl").import().unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].msgstr, "1.5");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("coerced non-text translation"));
        assert!(report.warnings[0].contains("Version"));
    }

    #[test]
    fn test_import_missing_file_is_an_error() {
        let result = XlsxImporter::new("does/not/exist.xlsx", "nl").import();
        assert!(result.is_err());
    }

    #[test]
    fn test_cell_text_coercions() {
        assert_eq!(cell_text(&Data::String("x".to_string())), "x");
        assert_eq!(cell_text(&Data::Int(3)), "3");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}
