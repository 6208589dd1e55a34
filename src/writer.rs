//! PO writer: reconstructed rows → .po catalog
//!
//! When the output catalog already exists its metadata is carried over so
//! project headers survive the spreadsheet round-trip. The revision date
//! always reflects the workbook the translations came from.

use crate::error::{PoxlsError, PoxlsResult};
use crate::types::TranslationRow;
use chrono::{DateTime, Local};
use polib::catalog::Catalog;
use polib::message::Message;
use polib::metadata::CatalogMetadata;
use polib::po_file;
use std::fs;
use std::path::{Path, PathBuf};

pub struct PoWriter {
    locale: String,
    workbook_path: PathBuf,
    output_path: PathBuf,
    copy_metadata: bool,
}

impl PoWriter {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        locale: &str,
        workbook_path: P,
        output_path: Q,
    ) -> Self {
        Self {
            locale: locale.to_string(),
            workbook_path: workbook_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            copy_metadata: true,
        }
    }

    /// Disable carrying metadata over from an existing output catalog.
    pub fn copy_metadata(mut self, enabled: bool) -> Self {
        self.copy_metadata = enabled;
        self
    }

    /// Serialize the rows and write the catalog. Returns the number of
    /// messages written. A workbook that yielded no rows is an error.
    pub fn write(&self, rows: &[TranslationRow]) -> PoxlsResult<usize> {
        if rows.is_empty() {
            return Err(PoxlsError::Import(
                "No messages found, aborting".to_string(),
            ));
        }

        let metadata = if self.copy_metadata && self.output_path.exists() {
            po_file::parse(&self.output_path)?.metadata
        } else {
            CatalogMetadata::new()
        };

        let mut catalog = Catalog::new(metadata);
        catalog.metadata.language = self.locale.clone();
        catalog.metadata.content_type = "text/plain; charset=UTF-8".to_string();
        catalog.metadata.content_transfer_encoding = "8bit".to_string();
        catalog.metadata.po_revision_date = po_timestamp(&self.workbook_path);

        for row in rows {
            let mut builder = Message::build_singular();
            builder
                .with_msgid(row.msgid.clone())
                .with_msgstr(row.msgstr.clone());

            if let Some(ctxt) = &row.msgctxt {
                builder.with_msgctxt(ctxt.clone());
            }
            if let Some(comments) = &row.comments {
                // The spreadsheet column is translator-editable, so the text
                // comes back as a translator comment.
                builder.with_translator_comments(comments.clone());
            }
            if let Some(references) = &row.references {
                builder.with_source(references.clone());
            }

            catalog.append_or_update(builder.done());
        }

        let count = catalog.count();
        po_file::write_to_file(&catalog, &self.output_path)?;
        Ok(count)
    }
}

/// PO-Revision-Date from the workbook's mtime, in the usual
/// "YYYY-MM-DD HH:MM+ZZZZ" form. Falls back to now when the file has no
/// readable timestamp.
fn po_timestamp(path: &Path) -> String {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now());
    modified.format("%Y-%m-%d %H:%M%z").to_string()
}
