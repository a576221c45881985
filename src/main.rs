//! docpatch - Entry point

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use docpatch::cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing::debug!(command = cli.command.name(), "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    docpatch::commands::dispatch(&cli.command, &mut out)
        .with_context(|| format!("{} failed", cli.command.name()))
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docpatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<docpatch::Error>()
                .map_or(1, docpatch::Error::exit_code);
            ExitCode::from(code as u8)
        }
    }
}
