//! Error types for docpatch

use thiserror::Error;

/// Result type alias for docpatch
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for docpatch
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file (or search directory) not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected
    #[error("PDF is password protected")]
    PasswordRequired,

    /// Page out of bounds
    #[error("Page {page} out of bounds (total: {total})")]
    PageOutOfBounds { page: u32, total: u32 },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Excerpt marker missing from the extracted text
    #[error("Marker not found in document text: {marker:?}")]
    MarkerNotFound { marker: String },

    /// `async <name>` header missing from the source file
    #[error("{name} function not found")]
    FunctionNotFound { name: String },

    /// Insertion anchor missing from a function body
    #[error("anchor {anchor:?} not found in {function}")]
    AnchorNotFound { function: String, anchor: String },

    /// Empty search string
    #[error("Search string must not be empty")]
    EmptyNeedle,

    /// Invalid file name glob
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Lookup failures (nothing matched) exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PdfNotFound { .. }
            | Error::MarkerNotFound { .. }
            | Error::FunctionNotFound { .. }
            | Error::AnchorNotFound { .. } => 2,
            _ => 1,
        }
    }
}
