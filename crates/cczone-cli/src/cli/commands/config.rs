//! `cczone config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&ctx, &key, &value),
        ConfigCommands::Init { force } => init_config(&ctx, force),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    // Show the file as stored, not the flag-adjusted effective config
    let config = Config::load_from(&ctx.config_path)?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config)?);
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!("  {} {}", "file:".bold(), ctx.config_path.display().to_string().dimmed());
            println!();

            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!("  {} {}", "api_base:".bold(), config.platform.api_base);
            println!("  {} {}", "probe_root:".bold(), config.platform.probe_root);
            println!(
                "  {} {}",
                "owned_suffixes:".bold(),
                config.platform.owned_suffixes.join(", ")
            );
            println!(
                "  {} {}",
                "log_level:".bold(),
                config.logging.level.as_deref().unwrap_or("warn")
            );
            println!(
                "  {} {}",
                "log_format:".bold(),
                config.logging.format.as_deref().unwrap_or("compact")
            );
        }
    }

    Ok(())
}

/// Apply `key = value` to a config.
fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
        }
        "api_base" => {
            url::Url::parse(value).map_err(|e| anyhow::anyhow!("Invalid api_base '{value}': {e}"))?;
            config.platform.api_base = value.trim_end_matches('/').to_string();
        }
        "probe_root" => {
            config.platform.probe_root = value.trim_matches('.').to_ascii_lowercase();
            // Fails here rather than on the next check
            config.platform.frontal_pattern()?;
        }
        "owned_suffixes" => {
            config.platform.owned_suffixes = value
                .split(',')
                .map(|s| s.trim().trim_matches('.').to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
        "log_level" => {
            if !matches!(value, "error" | "warn" | "info" | "debug" | "trace") {
                anyhow::bail!("Invalid log_level '{value}' (error, warn, info, debug, trace)");
            }
            config.logging.level = Some(value.to_string());
        }
        "log_format" => {
            if !matches!(value, "compact" | "pretty" | "json") {
                anyhow::bail!("Invalid log_format '{value}' (compact, pretty, json)");
            }
            config.logging.format = Some(value.to_string());
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 output_format  - Default output format (pretty/json/csv/yaml)\n  \
                 api_base       - Platform API base URL\n  \
                 probe_root     - Domain under which domain.<zone>.<root> resolves\n  \
                 owned_suffixes - Comma-separated platform-owned domains\n  \
                 log_level      - error/warn/info/debug/trace\n  \
                 log_format     - compact/pretty/json",
                key
            );
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_from(&ctx.config_path)?;
    apply(&mut config, key, value)?;
    config.save_to(&ctx.config_path)?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    if ctx.config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            ctx.config_path.display()
        );
    }

    Config::default().save_to(&ctx.config_path)?;
    println!(
        "{} wrote default configuration to {}",
        "Success:".green().bold(),
        ctx.config_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_known_keys() {
        let mut config = Config::default();

        apply(&mut config, "output", "yaml").unwrap();
        apply(&mut config, "api_base", "http://localhost:9000/").unwrap();
        apply(&mut config, "owned_suffixes", "cleverapps.io, Example.org.").unwrap();
        apply(&mut config, "log_level", "debug").unwrap();

        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
        assert_eq!(config.platform.api_base, "http://localhost:9000");
        assert_eq!(config.platform.owned_suffixes, vec!["cleverapps.io", "example.org"]);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();

        assert!(apply(&mut config, "api_base", "not a url").is_err());
        assert!(apply(&mut config, "log_level", "loud").is_err());
        assert!(apply(&mut config, "log_format", "xml").is_err());
        assert!(apply(&mut config, "api_key", "secret").is_err());
        assert_eq!(config, Config::default());
    }
}
