//! Tool configuration
//!
//! Every literal the tools operate on lives here with its default value.
//! Command-line flags override individual fields.

use std::path::PathBuf;

/// Default excerpt marker
pub const DEFAULT_MARKER: &str = "16. p7-no.37";

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_CHARS: usize = 500;

/// Default JavaScript source to patch
pub const DEFAULT_SOURCE_PATH: &str = "server/services/aiProblemService.js";

/// Functions that receive the metadata block, in patch order
pub const DEFAULT_FUNCTIONS: [&str; 4] = [
    "generateBlank",
    "generateVocab",
    "generateTitle",
    "generateTheme",
];

/// Insertion point inside each function body
pub const DEFAULT_ANCHOR: &str = "if (results.length < count)";

/// Presence of this string before the anchor means the block is already there
pub const DEFAULT_GUARD: &str = "documentTitle: docTitle";

/// Needle reported by the position inspector
pub const DEFAULT_NEEDLE: &str = "const passageCount = passages.length || 1;";

/// Metadata block spliced in before the anchor
pub const DEFAULT_METADATA_BLOCK: &str = "    const passageCount = passages.length || 1;
    results.forEach((problem, index) => {
      problem.metadata = {
        ...(problem.metadata || {}),
        documentTitle: docTitle,
        generator: problem.metadata?.generator || 'openai',
        passageIndex: (index % passageCount) + 1
      };
      problem.sourceLabel = ensureSourceLabel(problem.sourceLabel, { docTitle });
    });

";

/// Configuration for all docpatch subcommands
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Directory searched recursively for PDFs
    pub search_root: PathBuf,
    /// Substring the PDF file name must contain
    pub name_fragment: Option<String>,
    /// Marker the excerpt starts at
    pub marker: String,
    /// Excerpt length in characters
    pub excerpt_chars: usize,
    /// JavaScript file patched in place / inspected
    pub source_path: PathBuf,
    /// Function names to patch
    pub functions: Vec<String>,
    /// Anchor the block is inserted before
    pub anchor: String,
    /// Idempotence guard
    pub guard: String,
    /// Block inserted before the anchor
    pub block: String,
    /// Needle for the position inspector
    pub needle: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            search_root: PathBuf::from("."),
            name_fragment: None,
            marker: DEFAULT_MARKER.to_string(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            functions: DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            anchor: DEFAULT_ANCHOR.to_string(),
            guard: DEFAULT_GUARD.to_string(),
            block: DEFAULT_METADATA_BLOCK.to_string(),
            needle: DEFAULT_NEEDLE.to_string(),
        }
    }
}
