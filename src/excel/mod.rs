//! Excel (.xlsx) read/write support

pub mod exporter;
pub mod importer;

pub use exporter::XlsxExporter;
pub use importer::{ImportReport, XlsxImporter};
