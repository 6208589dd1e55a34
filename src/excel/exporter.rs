//! Workbook writer: PO catalogs → .xlsx

use crate::catalog::PoCatalog;
use crate::error::PoxlsResult;
use crate::schema::ColumnLayout;
use crate::types::{CommentKind, ExportOptions, MessageKey};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::collections::HashSet;
use std::path::Path;

/// Cell formats derived from the export options.
struct CellFormats {
    regular: Format,
    header: Format,
    msgid: Format,
    comment: Format,
    locale: Format,
    locale_fuzzy: Format,
}

/// Writes the "Translations" worksheet for a set of PO catalogs.
///
/// Message rows are the de-duplicated union of (msgid, msgctxt) keys across
/// all catalogs in first-seen order; the first catalog is the reference for
/// the comment columns.
pub struct XlsxExporter {
    catalogs: Vec<PoCatalog>,
    layout: ColumnLayout,
    options: ExportOptions,
}

impl XlsxExporter {
    pub fn new(
        catalogs: Vec<PoCatalog>,
        comment_kinds: &[CommentKind],
        options: ExportOptions,
    ) -> Self {
        let layout = ColumnLayout::derive(&catalogs, comment_kinds, options.always_write_context);
        Self {
            catalogs,
            layout,
            options,
        }
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Unique message keys across all catalogs, in first-seen order.
    pub fn collect_keys(&self) -> Vec<MessageKey> {
        let mut keys = Vec::new();
        let mut seen = HashSet::new();

        for catalog in &self.catalogs {
            for key in catalog.keys() {
                if seen.insert(key.clone()) {
                    keys.push(key);
                }
            }
        }

        keys
    }

    /// Write the workbook to `output`.
    pub fn export(&self, output: &Path) -> PoxlsResult<()> {
        let mut workbook = Workbook::new();
        let formats = self.build_formats();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Translations")?;

        self.apply_layout(worksheet)?;
        self.write_header(worksheet, &formats)?;
        self.write_body(worksheet, &formats)?;

        workbook.save(output)?;
        Ok(())
    }

    fn build_formats(&self) -> CellFormats {
        let base = Format::new()
            .set_font_name(&self.options.font_name)
            .set_font_size(self.options.font_size);

        let msgid = if self.options.wrap_msgid {
            base.clone().set_text_wrap()
        } else {
            base.clone()
        };

        let comment = if self.options.wrap_comments {
            base.clone().set_text_wrap()
        } else {
            base.clone().set_shrink()
        };

        let mut locale = if self.options.wrap_locale {
            base.clone().set_text_wrap()
        } else {
            base.clone()
        };
        let mut locale_fuzzy = base.clone().set_bold().set_italic();
        if self.options.lock_sheet {
            // Translators may only edit the translation cells.
            locale = locale.set_unlocked();
            locale_fuzzy = locale_fuzzy.set_unlocked();
        }

        CellFormats {
            header: base.clone().set_bold(),
            regular: base,
            msgid,
            comment,
            locale,
            locale_fuzzy,
        }
    }

    /// Column widths, frozen panes and optional sheet protection.
    fn apply_layout(&self, worksheet: &mut Worksheet) -> PoxlsResult<()> {
        let mut col: u16 = 0;

        if self.layout.has_context {
            worksheet.set_column_width(col, self.options.width_context)?;
            col += 1;
        }
        worksheet.set_column_width(col, self.options.width_msgid)?;
        col += 1;
        if self.layout.has_references {
            worksheet.set_column_width(col, self.options.width_comments)?;
            col += 1;
        }
        if self.layout.has_comments {
            worksheet.set_column_width(col, self.options.width_comments)?;
            col += 1;
        }
        for _ in &self.layout.locales {
            worksheet.set_column_width(col, self.options.width_locale)?;
            col += 1;
        }

        // Keep the header row and the key columns in view while scrolling.
        worksheet.set_freeze_panes(1, self.layout.frozen_columns())?;

        if self.options.lock_sheet {
            worksheet.protect();
        }

        Ok(())
    }

    fn write_header(&self, worksheet: &mut Worksheet, formats: &CellFormats) -> PoxlsResult<()> {
        for (col, name) in self.layout.headers().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, name, &formats.header)?;
        }
        Ok(())
    }

    fn write_body(&self, worksheet: &mut Worksheet, formats: &CellFormats) -> PoxlsResult<()> {
        // The first catalog supplies the comment columns.
        let reference = self.catalogs.first();

        for (idx, key) in self.collect_keys().iter().enumerate() {
            let row = (idx + 1) as u32;
            let mut col: u16 = 0;

            if self.layout.has_context {
                let ctxt = key.ctxt().unwrap_or_default();
                worksheet.write_string_with_format(row, col, ctxt, &formats.regular)?;
                col += 1;
            }

            worksheet.write_string_with_format(row, col, &key.msgid, &formats.msgid)?;
            col += 1;

            if self.layout.has_references {
                let refs = reference
                    .and_then(|c| c.references(key))
                    .unwrap_or_default();
                worksheet.write_string_with_format(row, col, &refs, &formats.comment)?;
                col += 1;
            }

            if self.layout.has_comments {
                let comments = reference.and_then(|c| c.comments(key)).unwrap_or_default();
                worksheet.write_string_with_format(row, col, &comments, &formats.comment)?;
                col += 1;
            }

            for catalog in &self.catalogs {
                match catalog.translation(key) {
                    Some((msgstr, true)) => {
                        worksheet.write_string_with_format(
                            row,
                            col,
                            &msgstr,
                            &formats.locale_fuzzy,
                        )?;
                    }
                    Some((msgstr, false)) => {
                        worksheet.write_string_with_format(row, col, &msgstr, &formats.locale)?;
                    }
                    None => {
                        worksheet.write_string_with_format(row, col, "", &formats.locale)?;
                    }
                }
                col += 1;
            }
        }

        Ok(())
    }
}
