//! # cczone-cli
//!
//! Command-line interface for Clever Cloud zone detection.
//!
//! ## Features
//!
//! - **Classification**: tell whether hostnames or URLs are served by Clever Cloud, and from which zone
//! - **Zone catalog**: list the platform's deployment zones
//! - **Directory inspection**: dump the frontal address → zone map
//! - **Navigation replay**: feed `<tab> <url>` events on stdin, as a browser would
//! - **Educational mode**: `--explain` flag explains what commands do
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod logging;
pub mod output;

pub use cli::run;
