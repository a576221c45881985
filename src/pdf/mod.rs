//! PDF processing layer
//!
//! File discovery on disk and text extraction through PDFium.

mod discovery;
mod reader;

pub use discovery::{find_first_pdf, find_pdfs, DiscoveryOptions, PdfFileInfo};
pub use reader::{PdfReader, PAGE_SEPARATOR};
