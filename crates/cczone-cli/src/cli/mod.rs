//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;

    crate::logging::init(&config.logging, cli.verbose, cli.no_color);

    // Flags and environment override the config file
    if let Some(api_base) = cli.api_base {
        config.platform.api_base = api_base;
    }

    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Create context for commands
    let ctx = commands::Context {
        config,
        config_path,
        output_format,
        explain: cli.explain,
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Check(args) => commands::check::execute(ctx, args).await,
        Commands::Zones => commands::zones::execute(ctx).await,
        Commands::Directory(args) => commands::directory::execute(ctx, args).await,
        Commands::Watch => commands::watch::execute(ctx).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}
