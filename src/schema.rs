//! Spreadsheet column schema derivation
//!
//! The exporter derives an ordered column layout from the loaded catalogs
//! and the requested options; the importer recovers the same mapping from
//! a workbook's header row. Both sides share the header names in
//! [`crate::types::headers`] so the round-trip is total.

use crate::catalog::PoCatalog;
use crate::types::{headers, CommentKind};

/// Ordered spreadsheet columns:
/// `[Message context]?, Message id, [References]?, [Comments]?, <locale>...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub has_context: bool,
    pub has_references: bool,
    pub has_comments: bool,
    pub locales: Vec<String>,
}

impl ColumnLayout {
    /// Derive the layout from the input catalogs and requested comment
    /// columns. The context column appears when any catalog uses msgctxt
    /// or when forced by the caller.
    pub fn derive(
        catalogs: &[PoCatalog],
        comment_kinds: &[CommentKind],
        always_write_context: bool,
    ) -> Self {
        let has_context =
            always_write_context || catalogs.iter().any(|c| c.has_message_context());

        let wants = |kind: CommentKind| {
            comment_kinds.contains(&kind) || comment_kinds.contains(&CommentKind::All)
        };

        Self {
            has_context,
            has_references: wants(CommentKind::References),
            has_comments: wants(CommentKind::Notes),
            locales: catalogs.iter().map(|c| c.locale.clone()).collect(),
        }
    }

    /// Header row, in column order.
    pub fn headers(&self) -> Vec<String> {
        let mut columns = Vec::new();

        if self.has_context {
            columns.push(headers::MESSAGE_CONTEXT.to_string());
        }
        columns.push(headers::MESSAGE_ID.to_string());
        if self.has_references {
            columns.push(headers::REFERENCES.to_string());
        }
        if self.has_comments {
            columns.push(headers::COMMENTS.to_string());
        }
        for locale in &self.locales {
            columns.push(locale.clone());
        }

        columns
    }

    /// Number of leading key columns (context + msgid) to keep frozen
    /// alongside the header row.
    pub fn frozen_columns(&self) -> u16 {
        if self.has_context {
            2
        } else {
            1
        }
    }

    /// Zero-based index of the first locale column.
    pub fn first_locale_column(&self) -> usize {
        self.headers().len() - self.locales.len()
    }
}

/// Column indices recovered from a workbook header row for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    pub context: Option<usize>,
    pub msgid: Option<usize>,
    pub comments: Option<usize>,
    pub references: Option<usize>,
    pub locale: Option<usize>,
}

impl HeaderMap {
    /// Match header cells by name. Unknown columns are ignored; on
    /// duplicate headers the first occurrence wins.
    pub fn parse(header_row: &[String], locale: &str) -> Self {
        let position = |name: &str| header_row.iter().position(|h| h == name);

        Self {
            context: position(headers::MESSAGE_CONTEXT),
            msgid: position(headers::MESSAGE_ID),
            comments: position(headers::COMMENTS),
            references: position(headers::REFERENCES),
            locale: position(locale),
        }
    }
}
