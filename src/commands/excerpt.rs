//! `excerpt` subcommand

use super::write_json;
use crate::cli::OutputFormat;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::pdf::{find_first_pdf, find_pdfs, DiscoveryOptions, PdfFileInfo, PdfReader};
use crate::text::excerpt;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct ExcerptResult {
    /// PDF the text came from
    pub source: String,
    pub marker: String,
    /// Byte offset of the marker in the document text
    pub offset: usize,
    /// Character offset of the marker in the document text
    pub char_offset: usize,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ListResult {
    pub root: String,
    pub files: Vec<PdfFileInfo>,
    pub total_count: u32,
}

fn discovery_options(config: &ToolConfig, pattern: Option<&str>) -> DiscoveryOptions {
    DiscoveryOptions {
        recursive: true,
        pattern: pattern.map(str::to_string),
        name_fragment: config.name_fragment.clone(),
    }
}

/// Cut the configured excerpt out of already-extracted document text
pub fn excerpt_from_text(source: &str, text: &str, config: &ToolConfig) -> Result<ExcerptResult> {
    let found = excerpt(text, &config.marker, config.excerpt_chars)?;

    Ok(ExcerptResult {
        source: source.to_string(),
        marker: config.marker.clone(),
        offset: found.offset,
        char_offset: found.char_offset,
        text: found.text,
    })
}

pub(super) fn run<W: Write>(
    config: &ToolConfig,
    pattern: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let options = discovery_options(config, pattern);
    let file = find_first_pdf(&config.search_root, &options)?;
    tracing::info!(path = %file.path, "extracting text");

    let reader = PdfReader::open(&file.path)?;
    let text = reader.full_text();
    tracing::debug!(pages = reader.page_count(), chars = text.chars().count(), "extracted");

    let result = excerpt_from_text(&file.path, &text, config)?;

    match format {
        OutputFormat::Text => writeln!(out, "{}", result.text)?,
        OutputFormat::Json => write_json(out, &result)?,
    }

    Ok(())
}

pub(super) fn list<W: Write>(
    config: &ToolConfig,
    pattern: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let options = discovery_options(config, pattern);
    let files = find_pdfs(&config.search_root, &options)?;
    tracing::info!(count = files.len(), "listed candidate PDFs");

    match format {
        OutputFormat::Text => {
            for file in &files {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    file.path,
                    file.size,
                    file.modified.as_deref().unwrap_or("-")
                )?;
            }
        }
        OutputFormat::Json => {
            let total_count = files.len() as u32;
            let result = ListResult {
                root: config.search_root.display().to_string(),
                files,
                total_count,
            };
            write_json(out, &result)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_excerpt_from_text_defaults() {
        let config = ToolConfig::default();
        let body = "가".repeat(600);
        let text = format!("15. p7-no.36 이전 문항\x0c16. p7-no.37 {body}");

        let result = excerpt_from_text("exam.pdf", &text, &config).unwrap();
        assert_eq!(result.source, "exam.pdf");
        assert_eq!(result.char_offset, "15. p7-no.36 이전 문항\x0c".chars().count());
        assert!(result.text.starts_with("16. p7-no.37 가"));
        assert_eq!(result.text.chars().count(), 500);
    }

    #[test]
    fn test_excerpt_from_text_missing_marker() {
        let config = ToolConfig::default();
        let result = excerpt_from_text("exam.pdf", "nothing here", &config);
        assert!(matches!(result, Err(Error::MarkerNotFound { .. })));
    }

    #[test]
    fn test_list_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("LOE_reading.pdf"), b"%PDF-1.7").unwrap();
        std::fs::write(dir.path().join("LOE_listening.pdf"), b"%PDF-1.7").unwrap();

        let config = ToolConfig {
            search_root: dir.path().to_path_buf(),
            name_fragment: Some("reading".to_string()),
            ..ToolConfig::default()
        };
        let mut out = Vec::new();
        list(&config, None, OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total_count"], 1);
        assert_eq!(value["files"][0]["name"], "LOE_reading.pdf");
        assert_eq!(value["files"][0]["size"], 8);
    }

    #[test]
    fn test_run_without_match_fails_before_pdf_engine() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfig {
            search_root: dir.path().to_path_buf(),
            name_fragment: Some("missing".to_string()),
            ..ToolConfig::default()
        };
        let mut out = Vec::new();
        let result = run(&config, None, OutputFormat::Text, &mut out);

        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_rejects_non_pdf_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fake-exam.pdf"), b"plain text").unwrap();

        let config = ToolConfig {
            search_root: dir.path().to_path_buf(),
            name_fragment: Some("exam".to_string()),
            ..ToolConfig::default()
        };
        let mut out = Vec::new();
        let result = run(&config, None, OutputFormat::Text, &mut out);
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }
}
