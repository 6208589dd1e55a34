//! Shared types for the PO ↔ XLSX conversion

use clap::ValueEnum;
use std::fmt;

/// Fixed header names shared by the exporter and the importer.
///
/// The importer matches columns by these names, so changing them breaks
/// round-tripping of previously exported workbooks.
pub mod headers {
    pub const MESSAGE_CONTEXT: &str = "Message context";
    pub const MESSAGE_ID: &str = "Message id";
    pub const COMMENTS: &str = "Comments";
    pub const REFERENCES: &str = "References";
}

/// Comment columns the user can request on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommentKind {
    /// Translator and extracted comments ("#" / "#." lines)
    Notes,
    /// Source references ("#:" lines)
    References,
    /// All comment columns
    All,
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentKind::Notes => write!(f, "notes"),
            CommentKind::References => write!(f, "references"),
            CommentKind::All => write!(f, "all"),
        }
    }
}

/// Identity of a message row: msgid scoped by an optional msgctxt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub msgid: String,
    pub msgctxt: Option<String>,
}

impl MessageKey {
    pub fn new(msgid: impl Into<String>, msgctxt: Option<String>) -> Self {
        Self {
            msgid: msgid.into(),
            msgctxt,
        }
    }

    /// Context in borrowed form, for catalog lookups.
    pub fn ctxt(&self) -> Option<&str> {
        self.msgctxt.as_deref()
    }
}

/// One reconstructed translation row read back from a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    pub msgctxt: Option<String>,
    pub msgid: String,
    pub msgstr: String,
    pub comments: Option<String>,
    pub references: Option<String>,
}

impl TranslationRow {
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self {
            msgctxt: None,
            msgid: msgid.into(),
            msgstr: msgstr.into(),
            comments: None,
            references: None,
        }
    }
}

/// Styling and layout knobs for the workbook writer.
///
/// Widths are Excel column widths in the 0..=200 range the CLI enforces.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub width_context: u16,
    pub width_msgid: u16,
    pub width_comments: u16,
    pub width_locale: u16,
    pub wrap_msgid: bool,
    pub wrap_comments: bool,
    pub wrap_locale: bool,
    pub always_write_context: bool,
    pub lock_sheet: bool,
    pub font_name: String,
    pub font_size: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width_context: 20,
            width_msgid: 80,
            width_comments: 50,
            width_locale: 80,
            wrap_msgid: true,
            wrap_comments: false,
            wrap_locale: true,
            always_write_context: false,
            lock_sheet: false,
            font_name: "Verdana".to_string(),
            font_size: 11.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comment_kind_display() {
        assert_eq!(CommentKind::Notes.to_string(), "notes");
        assert_eq!(CommentKind::References.to_string(), "references");
        assert_eq!(CommentKind::All.to_string(), "all");
    }

    #[test]
    fn test_message_key_identity() {
        let plain = MessageKey::new("Save", None);
        let scoped = MessageKey::new("Save", Some("menu".to_string()));
        assert_ne!(plain, scoped);
        assert_eq!(plain, MessageKey::new("Save", None));
        assert_eq!(scoped.ctxt(), Some("menu"));
    }

    #[test]
    fn test_export_options_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.width_msgid, 80);
        assert_eq!(options.width_locale, 80);
        assert!(options.wrap_msgid);
        assert!(!options.wrap_comments);
        assert!(!options.lock_sheet);
    }
}
