//! `themekeeper` - show, toggle and persist the light/dark theme preference.

mod app;
mod cli;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use themekeeper::{OsPreference, ThemeConfig};

use crate::app::App;
use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with reports.
    // Set RUST_LOG=themekeeper=debug for verbose logging.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ThemeConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ThemeConfig::default(),
    };

    let app = App::open(&cli.store, config, OsPreference::new())?;
    let report = match cli.command.unwrap_or(Command::Show) {
        Command::Show => app.report(),
        Command::Toggle => app.toggle(),
        Command::Set { theme } => app.set(theme),
        Command::Reset => app.reset(),
        Command::Watch { interval_ms } => {
            return watch(&app, Duration::from_millis(interval_ms), cli.output);
        }
    };
    println!("{}", output::render(&report, cli.output)?);
    Ok(())
}

fn watch(app: &App, interval: Duration, mode: cli::OutputMode) -> Result<()> {
    println!("{}", output::render(&app.report(), mode)?);
    loop {
        std::thread::sleep(interval);
        if let Some(report) = app.poll() {
            println!("{}", output::render(&report, mode)?);
        }
    }
}
