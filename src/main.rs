//! xpt - minimal package-fetching client
//!
//! Reads a list of remote repositories, merges their per-tag package manifests
//! into a single local index, and installs packages resolved by name and tag
//! from that index into a local cache directory.

use clap::Parser;
use console::Style;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cache;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod fetch;
mod hash;
mod index;
mod installer;
mod path_utils;
mod progress;
mod resolver;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::Layout;
use error::{Result, XptError};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "XPT_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "xpt=debug" } else { "xpt=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn report(err: &XptError) {
    let red = Style::new().red().bold();
    eprintln!("{} {err}", red.apply_to("Error:"));
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

/// Resolve the installation root once and hand it to `run`
fn with_layout(cli: &Cli, run: impl FnOnce(&Layout) -> Result<()>) -> Result<()> {
    let layout = Layout::resolve(cli.root.clone())?;
    tracing::debug!(root = %layout.root().display(), "installation root");
    run(&layout)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Update => with_layout(&cli, commands::update::run),
        Commands::Install(args) => with_layout(&cli, |layout| commands::install::run(layout, args)),
        Commands::List(args) => with_layout(&cli, |layout| commands::list::run(layout, args)),
        Commands::Cache => commands::cache::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}
