//! Locating PDF files on disk

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;

/// Filters applied while walking a directory
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Glob matched against the file name (e.g. "LOE_*.pdf")
    pub pattern: Option<String>,
    /// Substring the file name must contain
    pub name_fragment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfFileInfo {
    /// Full path to the PDF file
    pub path: String,
    /// Filename only
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Last modified time (ISO 8601 format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// List PDF files under `root`, sorted by path
pub fn find_pdfs<P: AsRef<Path>>(root: P, options: &DiscoveryOptions) -> Result<Vec<PdfFileInfo>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(Error::PdfNotFound {
            path: root.display().to_string(),
        });
    }

    if !root.is_dir() {
        return Err(Error::InvalidPdf {
            reason: format!("{} is not a directory", root.display()),
        });
    }

    let pattern = options
        .pattern
        .as_deref()
        .map(glob::Pattern::new)
        .transpose()?;

    let mut files = Vec::new();
    collect_pdfs(root, options, &pattern, &mut files)?;

    // Sort by path for consistent ordering
    files.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::debug!(root = %root.display(), count = files.len(), "collected PDFs");
    Ok(files)
}

/// First PDF (in path order) under `root` that passes the filters
pub fn find_first_pdf<P: AsRef<Path>>(root: P, options: &DiscoveryOptions) -> Result<PdfFileInfo> {
    let root = root.as_ref();

    find_pdfs(root, options)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::PdfNotFound {
            path: format!(
                "{}/**/*{}*.pdf",
                root.display(),
                options.name_fragment.as_deref().unwrap_or_default()
            ),
        })
}

fn collect_pdfs(
    dir: &Path,
    options: &DiscoveryOptions,
    pattern: &Option<glob::Pattern>,
    files: &mut Vec<PdfFileInfo>,
) -> Result<()> {
    let entries = std::fs::read_dir(dir)?;

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue, // Skip entries we can't read
        };

        let path = entry.path();

        if path.is_dir() {
            if options.recursive {
                if let Err(e) = collect_pdfs(&path, options, pattern, files) {
                    tracing::warn!(dir = %path.display(), error = %e, "skipping directory");
                }
            }
            continue;
        }

        if !path.is_file() || !is_pdf(&path) {
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if let Some(ref pat) = pattern {
            if !pat.matches(&name) {
                continue;
            }
        }

        if let Some(ref fragment) = options.name_fragment {
            if !name.contains(fragment.as_str()) {
                continue;
            }
        }

        let metadata = std::fs::metadata(&path).ok();
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
            .and_then(|d| chrono::DateTime::from_timestamp(d.as_secs() as i64, 0))
            .map(|dt| dt.to_rfc3339());

        files.push(PdfFileInfo {
            path: path.to_string_lossy().to_string(),
            name,
            size,
            modified,
        });
    }

    Ok(())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"%PDF-1.4\n").unwrap();
    }

    #[test]
    fn test_find_pdfs_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.pdf"));
        touch(&dir.path().join("nested/deeper/a.PDF"));
        touch(&dir.path().join("notes.txt"));

        let options = DiscoveryOptions {
            recursive: true,
            ..Default::default()
        };
        let files = find_pdfs(dir.path(), &options).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["b.pdf", "a.PDF"]);
        assert!(files.iter().all(|f| f.size == 9));
        assert!(files.iter().all(|f| f.modified.is_some()));
    }

    #[test]
    fn test_find_pdfs_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("top.pdf"));
        touch(&dir.path().join("sub/inner.pdf"));

        let files = find_pdfs(dir.path(), &DiscoveryOptions::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "top.pdf");
    }

    #[test]
    fn test_find_pdfs_pattern_and_fragment() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("LOE_2025_09월-읽기영역.pdf"));
        touch(&dir.path().join("LOE_2025_06월-듣기영역.pdf"));
        touch(&dir.path().join("other.pdf"));

        let options = DiscoveryOptions {
            recursive: true,
            pattern: Some("LOE_*.pdf".to_string()),
            name_fragment: Some("읽기영역".to_string()),
        };
        let files = find_pdfs(dir.path(), &options).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "LOE_2025_09월-읽기영역.pdf");
    }

    #[test]
    fn test_find_first_pdf() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("z/exam-reading.pdf"));
        touch(&dir.path().join("a/exam-reading.pdf"));

        let options = DiscoveryOptions {
            recursive: true,
            pattern: None,
            name_fragment: Some("reading".to_string()),
        };
        let first = find_first_pdf(dir.path(), &options).unwrap();
        assert_eq!(
            first.path,
            dir.path().join("a/exam-reading.pdf").to_string_lossy()
        );

        let options = DiscoveryOptions {
            name_fragment: Some("writing".to_string()),
            ..options
        };
        let missing = find_first_pdf(dir.path(), &options);
        match missing {
            Err(Error::PdfNotFound { path }) => assert!(path.ends_with("*writing*.pdf")),
            other => panic!("expected PdfNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_find_pdfs_missing_root() {
        let result = find_pdfs("/nonexistent/dir", &DiscoveryOptions::default());
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
    }

    #[test]
    fn test_find_pdfs_root_is_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = find_pdfs(file.path(), &DiscoveryOptions::default());
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }

    #[test]
    fn test_find_pdfs_invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let options = DiscoveryOptions {
            pattern: Some("[".to_string()),
            ..Default::default()
        };
        let result = find_pdfs(dir.path(), &options);
        assert!(matches!(result, Err(Error::InvalidPattern(_))));
    }
}
