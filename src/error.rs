use thiserror::Error;

pub type PoxlsResult<T> = Result<T, PoxlsError>;

#[derive(Error, Debug)]
pub enum PoxlsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PO parsing error: {0}")]
    Po(#[from] polib::po_file::POParseError),

    #[error("Excel write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Excel read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Import error: {0}")]
    Import(String),
}
