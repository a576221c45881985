//! docpatch library
//!
//! This crate backs three small command-line tools:
//! - `excerpt`: Print a fixed-length text window from a PDF found by file name
//! - `insert-metadata`: Splice a metadata block into named JavaScript functions
//! - `positions`: List the offsets of a string in a file

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pdf;
pub mod text;

pub use config::ToolConfig;
pub use error::{Error, Result};
