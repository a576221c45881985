//! PDF reader wrapper for PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// Separator appended after every page in [`PdfReader::full_text`]
pub const PAGE_SEPARATOR: char = '\x0c';

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

fn check_header(data: &[u8]) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }
    Ok(())
}

/// PDF reader using PDFium
///
/// All page text is extracted when the document is opened.
pub struct PdfReader {
    page_texts: Vec<String>,
}

impl PdfReader {
    /// Open a PDF from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::PdfNotFound {
                path: path.display().to_string(),
            });
        }

        let data = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "read PDF");
        Self::open_bytes(&data)
    }

    /// Open a PDF from bytes
    pub fn open_bytes(data: &[u8]) -> Result<Self> {
        check_header(data)?;

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(Self::map_pdfium_error)?;

        let page_texts = Self::extract_all_page_texts(&document)?;

        Ok(Self { page_texts })
    }

    fn extract_all_page_texts(document: &PdfDocument) -> Result<Vec<String>> {
        let pages = document.pages();
        let mut texts = Vec::with_capacity(pages.len() as usize);

        for index in 0..pages.len() {
            let page = pages.get(index).map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", index + 1, e),
            })?;

            // Pages without a text layer contribute an empty string
            let text = match page.text() {
                Ok(t) => t.all(),
                Err(e) => {
                    tracing::warn!(page = index + 1, error = %e, "no text layer");
                    String::new()
                }
            };
            texts.push(text);
        }

        Ok(texts)
    }

    fn map_pdfium_error(err: PdfiumError) -> Error {
        match err {
            PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
                Error::PasswordRequired
            }
            _ => Error::Pdfium {
                reason: format!("{}", err),
            },
        }
    }

    /// Get the number of pages
    pub fn page_count(&self) -> u32 {
        self.page_texts.len() as u32
    }

    /// Extract text from a specific page (1-indexed)
    pub fn extract_page_text(&self, page_num: u32) -> Result<String> {
        if page_num < 1 || page_num > self.page_count() {
            return Err(Error::PageOutOfBounds {
                page: page_num,
                total: self.page_count(),
            });
        }

        Ok(self.page_texts[(page_num - 1) as usize].clone())
    }

    /// Extract text from all pages
    pub fn extract_all_text(&self) -> Result<Vec<(u32, String)>> {
        let mut results = Vec::new();
        for page_num in 1..=self.page_count() {
            let text = self.extract_page_text(page_num)?;
            results.push((page_num, text));
        }
        Ok(results)
    }

    /// Whole-document text with a form feed after each page
    pub fn full_text(&self) -> String {
        join_pages(&self.page_texts)
    }
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push(PAGE_SEPARATOR);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_detection() {
        let result = PdfReader::open_bytes(b"not a pdf");
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            PdfReader::open_bytes(b"%PD"),
            Err(Error::InvalidPdf { .. })
        ));
    }

    #[test]
    fn test_open_nonexistent_file() {
        let result = PdfReader::open("/nonexistent/path/file.pdf");
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
    }

    #[test]
    fn test_page_access() {
        let reader = PdfReader {
            page_texts: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(reader.page_count(), 2);
        assert_eq!(reader.extract_page_text(2).unwrap(), "second");
        assert!(matches!(
            reader.extract_page_text(3),
            Err(Error::PageOutOfBounds { page: 3, total: 2 })
        ));
        assert!(reader.extract_page_text(0).is_err());
        assert_eq!(reader.extract_all_text().unwrap().len(), 2);
    }

    #[test]
    fn test_full_text_separates_pages() {
        let reader = PdfReader {
            page_texts: vec!["one".to_string(), String::new(), "three".to_string()],
        };
        assert_eq!(reader.full_text(), "one\x0c\x0cthree\x0c");
    }
}
