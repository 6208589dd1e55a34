//! poxls - Convert gettext PO catalogs to XLSX spreadsheets and back
//!
//! This library converts Portable Object (.po) translation catalogs into
//! spreadsheet workbooks that non-technical translators can edit, and turns
//! the edited workbooks back into catalogs.
//!
//! # Features
//!
//! - One translation column per locale, with locale guessing from the PO
//!   metadata or the file name
//! - Optional context, comment and reference columns
//! - Frozen header and key columns, fixed widths, fuzzy entries in italic
//! - Round-trip: header names recover the column mapping on import
//!
//! # Example
//!
//! ```no_run
//! use poxls::catalog::PoCatalog;
//! use poxls::excel::XlsxExporter;
//! use poxls::types::{CommentKind, ExportOptions};
//! use std::path::Path;
//!
//! let nl = PoCatalog::open("locales/nl.po")?;
//! let fr = PoCatalog::open("fr:locales/fr/mydomain.po")?;
//!
//! let exporter = XlsxExporter::new(
//!     vec![nl, fr],
//!     &[CommentKind::Notes],
//!     ExportOptions::default(),
//! );
//! exporter.export(Path::new("messages.xlsx"))?;
//! # Ok::<(), poxls::error::PoxlsError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod excel;
pub mod schema;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{PoxlsError, PoxlsResult};
pub use types::{CommentKind, ExportOptions, MessageKey, TranslationRow};
