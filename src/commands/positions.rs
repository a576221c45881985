//! `positions` subcommand

use super::write_json;
use crate::cli::OutputFormat;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::text::{char_offsets, find_positions};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetUnit {
    Bytes,
    Chars,
}

#[derive(Debug, Serialize)]
pub struct PositionsResult {
    pub file: String,
    pub needle: String,
    pub unit: OffsetUnit,
    pub offsets: Vec<usize>,
}

/// Scan the configured file for the configured needle
pub fn scan_file(config: &ToolConfig, unit: OffsetUnit) -> Result<PositionsResult> {
    let path = &config.source_path;
    let text = std::fs::read_to_string(path)?;

    let byte_offsets = find_positions(&text, &config.needle)?;
    tracing::debug!(file = %path.display(), hits = byte_offsets.len(), "scanned");

    let offsets = match unit {
        OffsetUnit::Bytes => byte_offsets,
        OffsetUnit::Chars => char_offsets(&text, &byte_offsets),
    };

    Ok(PositionsResult {
        file: path.display().to_string(),
        needle: config.needle.clone(),
        unit,
        offsets,
    })
}

pub(super) fn run<W: Write>(
    config: &ToolConfig,
    unit: OffsetUnit,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let result = scan_file(config, unit)?;

    match format {
        OutputFormat::Text => writeln!(out, "{:?}", result.offsets)?,
        OutputFormat::Json => write_json(out, &result)?,
    }

    Ok(())
}
