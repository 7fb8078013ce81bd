//! Error types for the sheetlens facade

use thiserror::Error;

use sheetlens_xlsx::XlsxError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`XlsxArchive`](crate::XlsxArchive)
#[derive(Debug, Error)]
pub enum Error {
    /// The path does not carry an `.xlsx` extension
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Package or part decoding failed
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    /// Address, range or sheet lookup failed
    #[error(transparent)]
    Core(#[from] sheetlens_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The core error behind this one, looking through the xlsx layer
    pub fn as_core(&self) -> Option<&sheetlens_core::Error> {
        match self {
            Error::Core(e) | Error::Xlsx(XlsxError::Core(e)) => Some(e),
            _ => None,
        }
    }
}
