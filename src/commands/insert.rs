//! `insert-metadata` subcommand

use super::write_json;
use crate::cli::OutputFormat;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::text::{apply_plan, FunctionReport, PatchPlan, PatchStatus};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct InsertResult {
    pub file: String,
    pub functions: Vec<FunctionReport>,
    /// True if the file was rewritten
    pub written: bool,
    pub dry_run: bool,
}

/// Patch the configured source file in place.
///
/// The file is only written when at least one block was inserted, and
/// never when any function or anchor is missing.
pub fn patch_file(config: &ToolConfig, dry_run: bool) -> Result<InsertResult> {
    let path = &config.source_path;
    let text = std::fs::read_to_string(path)?;

    let plan = PatchPlan::from(config);
    let report = apply_plan(&text, &plan)?;

    let written = report.changed() && !dry_run;
    if written {
        std::fs::write(path, &report.text)?;
        tracing::info!(file = %path.display(), "wrote patched source");
    } else if report.changed() {
        tracing::info!(file = %path.display(), "dry run, not writing");
    } else {
        tracing::info!(file = %path.display(), "metadata blocks already present");
    }

    Ok(InsertResult {
        file: path.display().to_string(),
        functions: report.functions,
        written,
        dry_run,
    })
}

pub(super) fn run<W: Write>(
    config: &ToolConfig,
    dry_run: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let result = patch_file(config, dry_run)?;

    match format {
        OutputFormat::Text => {
            for function in &result.functions {
                let status = match function.status {
                    PatchStatus::Inserted if result.dry_run => "would insert",
                    PatchStatus::Inserted => "inserted",
                    PatchStatus::AlreadyPresent => "already present",
                };
                writeln!(out, "{}\t{}", function.name, status)?;
            }
        }
        OutputFormat::Json => write_json(out, &result)?,
    }

    Ok(())
}
