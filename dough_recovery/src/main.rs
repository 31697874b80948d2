use anyhow::{Context, Result};
use clap::Parser;
use dough_recovery::{Cli, RecoveryConfig, run};
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = RecoveryConfig::from(cli);
    tracing::debug!(count = config.count, format = ?config.format, "starting recovery");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run(&config, stdin.lock(), &mut stdout, &mut stderr).context("recovery failed")?;
    Ok(())
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` overrides
/// the default `warn` level.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
