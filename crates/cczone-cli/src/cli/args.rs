//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Is this website hosted on Clever Cloud?
///
/// Classifies hostnames and URLs: owned platform domains, frontal canonical
/// names, and addresses known to front a deployment zone.
/// Use --explain on any command to learn what it does.
#[derive(Parser, Debug)]
#[command(name = "cczone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Platform API base URL (overrides the config file)
    #[arg(long, env = "CCZONE_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, env = "CCZONE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity (debug logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether hostnames or URLs are hosted on the platform
    Check(CheckArgs),

    /// List the platform's deployment zones
    Zones,

    /// Build the frontal address directory and inspect it
    Directory(DirectoryArgs),

    /// Replay navigation events read from stdin (`<tab-id> <url>` per line)
    Watch,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Check command
// ============================================================================

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Hostnames or URLs (e.g., www.example.com, https://shop.example.com/cart)
    #[arg(required = true)]
    pub targets: Vec<String>,
}

// ============================================================================
// Directory command
// ============================================================================

#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// Only look up these addresses
    #[arg(short, long)]
    pub address: Vec<IpAddr>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., api_base, output_format, log_level)
        key: String,

        /// Value to set
        value: String,
    },

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show config file path
    Path,
}
