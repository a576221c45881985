//! Subcommand implementations
//!
//! Each command writes its results to the given writer and logs progress
//! through `tracing`, which goes to stderr.

mod excerpt;
mod insert;
mod positions;

pub use excerpt::{excerpt_from_text, ExcerptResult, ListResult};
pub use insert::{patch_file, InsertResult};
pub use positions::{scan_file, OffsetUnit, PositionsResult};

use crate::cli::Commands;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Run the parsed subcommand
pub fn dispatch<W: Write>(command: &Commands, out: &mut W) -> Result<()> {
    let config = command.config();

    match command {
        Commands::Excerpt {
            pattern,
            list,
            format,
            ..
        } => {
            if *list {
                excerpt::list(&config, pattern.as_deref(), *format, out)
            } else {
                excerpt::run(&config, pattern.as_deref(), *format, out)
            }
        }
        Commands::InsertMetadata {
            dry_run, format, ..
        } => insert::run(&config, *dry_run, *format, out),
        Commands::Positions { bytes, format, .. } => {
            let unit = if *bytes {
                OffsetUnit::Bytes
            } else {
                OffsetUnit::Chars
            };
            positions::run(&config, unit, *format, out)
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json}")?;
    Ok(())
}

