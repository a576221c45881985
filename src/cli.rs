//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{
    ToolConfig, DEFAULT_EXCERPT_CHARS, DEFAULT_MARKER, DEFAULT_NEEDLE, DEFAULT_SOURCE_PATH,
};

/// Excerpt PDFs, patch metadata blocks into JavaScript, and inspect string offsets.
#[derive(Debug, Parser)]
#[command(name = "docpatch", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format shared by all subcommands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a text window starting at a marker in the first PDF whose name matches
    Excerpt {
        /// Directory searched recursively for PDFs
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Substring the PDF file name must contain
        #[arg(long, required_unless_present = "list")]
        name: Option<String>,

        /// Glob the PDF file name must match (e.g. 'LOE_*.pdf')
        #[arg(long)]
        pattern: Option<String>,

        /// Marker the excerpt starts at
        #[arg(long, default_value = DEFAULT_MARKER)]
        marker: String,

        /// Excerpt length in characters
        #[arg(long, default_value_t = DEFAULT_EXCERPT_CHARS)]
        chars: usize,

        /// List candidate PDFs instead of extracting
        #[arg(long)]
        list: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Insert the metadata block into each named function, once
    InsertMetadata {
        /// JavaScript file patched in place
        #[arg(long, value_name = "FILE", default_value = DEFAULT_SOURCE_PATH)]
        file: PathBuf,

        /// Function to patch (repeatable). Default: the four problem generators
        #[arg(long = "function", value_name = "NAME")]
        functions: Vec<String>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the offsets of every occurrence of a string
    Positions {
        /// File to scan
        #[arg(long, value_name = "FILE", default_value = DEFAULT_SOURCE_PATH)]
        file: PathBuf,

        /// String to look for
        #[arg(long, default_value = DEFAULT_NEEDLE)]
        needle: String,

        /// Report byte offsets instead of character offsets
        #[arg(long)]
        bytes: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Excerpt { .. } => "excerpt",
            Commands::InsertMetadata { .. } => "insert-metadata",
            Commands::Positions { .. } => "positions",
        }
    }

    /// Build the tool configuration, with flags overriding defaults
    pub fn config(&self) -> ToolConfig {
        let mut config = ToolConfig::default();

        match self {
            Commands::Excerpt {
                root,
                name,
                marker,
                chars,
                ..
            } => {
                config.search_root = root.clone();
                config.name_fragment = name.clone();
                config.marker = marker.clone();
                config.excerpt_chars = *chars;
            }
            Commands::InsertMetadata {
                file, functions, ..
            } => {
                config.source_path = file.clone();
                if !functions.is_empty() {
                    config.functions = functions.clone();
                }
            }
            Commands::Positions { file, needle, .. } => {
                config.source_path = file.clone();
                config.needle = needle.clone();
            }
        }

        config
    }
}
