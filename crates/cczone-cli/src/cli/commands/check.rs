//! `cczone check` - Classify hostnames and URLs.

use anyhow::Result;
use cczone::{hostname_of, Verdict};
use colored::Colorize;
use futures_util::future::join_all;
use serde::Serialize;

use super::Context;
use crate::cli::args::CheckArgs;
use crate::education::Explain;
use crate::output::{csv_field, OutputFormat};

/// One classified target.
#[derive(Debug, Serialize)]
struct CheckRow {
    target: String,
    hostname: Option<String>,
    is_hosted: Option<bool>,
    zone: Option<String>,
    error: Option<String>,
}

impl CheckRow {
    fn new(target: &str, hostname: Option<String>, outcome: Result<Verdict, String>) -> Self {
        let (is_hosted, zone, error) = match outcome {
            Ok(verdict) => (
                Some(verdict.is_hosted()),
                verdict.zone().map(ToString::to_string),
                None,
            ),
            Err(e) => (None, None, Some(e)),
        };

        Self {
            target: target.to_string(),
            hostname,
            is_hosted,
            zone,
            error,
        }
    }
}

/// Hostname named by a command-line target: the host of a URL, or the
/// target itself when it is a bare hostname.
fn target_hostname(target: &str) -> Option<String> {
    if target.contains("://") {
        return hostname_of(target);
    }

    let host = target.trim().trim_end_matches('.').to_ascii_lowercase();
    (!host.is_empty()).then_some(host)
}

pub async fn execute(ctx: Context, args: CheckArgs) -> Result<()> {
    if ctx.explain {
        Explain::check(&ctx.platform().probe_root).print();
    }

    let classifier = ctx.classifier()?;

    // Every target classifies concurrently; they share one directory.
    let checks = args.targets.iter().map(|target| {
        let classifier = &classifier;
        async move {
            let hostname = target_hostname(target);
            let outcome = match &hostname {
                Some(host) => classifier.check(host).await.map_err(|e| e.to_string()),
                None => Err("no hostname in target".to_string()),
            };
            CheckRow::new(target, hostname, outcome)
        }
    });
    let rows = join_all(checks).await;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&rows)?);
        }
        OutputFormat::Csv => {
            println!("target,hostname,is_hosted,zone,error");
            for row in &rows {
                println!(
                    "{},{},{},{},{}",
                    csv_field(&row.target),
                    row.hostname.as_deref().unwrap_or(""),
                    row.is_hosted.map(|h| h.to_string()).unwrap_or_default(),
                    row.zone.as_deref().unwrap_or(""),
                    csv_field(row.error.as_deref().unwrap_or(""))
                );
            }
        }
        OutputFormat::Pretty => print_pretty(&rows),
    }

    let failures = rows.iter().filter(|row| row.error.is_some()).count();
    if failures > 0 {
        anyhow::bail!("{failures} of {} target(s) could not be classified", rows.len());
    }

    Ok(())
}

fn print_pretty(rows: &[CheckRow]) {
    let width = rows
        .iter()
        .map(|row| row.hostname.as_deref().unwrap_or(&row.target).len())
        .max()
        .unwrap_or(0);

    for row in rows {
        let name = row.hostname.as_deref().unwrap_or(&row.target);
        let status = match (&row.error, row.is_hosted, &row.zone) {
            (Some(e), _, _) => format!("{} {}", "error:".red().bold(), e),
            (None, Some(true), Some(zone)) => format!(
                "{} (zone {})",
                "hosted by Clever Cloud".green().bold(),
                zone.cyan()
            ),
            (None, Some(true), None) => format!(
                "{} {}",
                "hosted by Clever Cloud".green().bold(),
                "(zone unknown)".dimmed()
            ),
            _ => "probably not hosted by Clever Cloud".yellow().to_string(),
        };
        println!("  {name:<width$}  {status}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cczone::Zone;

    #[test]
    fn targets_to_hostnames() {
        assert_eq!(target_hostname("WWW.Example.com.").as_deref(), Some("www.example.com"));
        assert_eq!(
            target_hostname("https://shop.example.com:8443/cart?id=1").as_deref(),
            Some("shop.example.com")
        );
        assert_eq!(target_hostname("file:///etc/hosts"), None);
        assert_eq!(target_hostname("   "), None);
    }

    #[test]
    fn rows_from_outcomes() {
        let row = CheckRow::new(
            "app.example.com",
            Some("app.example.com".into()),
            Ok(Verdict::in_zone(Zone::from("par"))),
        );
        assert_eq!(row.is_hosted, Some(true));
        assert_eq!(row.zone.as_deref(), Some("par"));
        assert!(row.error.is_none());

        let row = CheckRow::new("x", Some("x".into()), Err("boom".into()));
        assert_eq!(row.is_hosted, None);
        assert_eq!(row.error.as_deref(), Some("boom"));
    }
}
