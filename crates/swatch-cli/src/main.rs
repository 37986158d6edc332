use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use swatch_cli::{run, Cli};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("SWATCH_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let output = run(Cli::parse())?;
    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}
