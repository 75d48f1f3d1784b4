//! `cczone directory` - Build and inspect the frontal address directory.

use anyhow::Result;
use cczone::{Snapshot, ZoneCatalog, ZoneDirectory};
use colored::Colorize;
use serde::Serialize;
use std::net::IpAddr;
use std::sync::Arc;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::DirectoryArgs;
use crate::education::Explain;
use crate::output::OutputFormat;

#[derive(Tabled, Serialize)]
struct EntryRow {
    #[tabled(rename = "Address")]
    address: IpAddr,
    #[tabled(rename = "Zone")]
    zone: String,
}

fn rows(snapshot: &Snapshot, only: &[IpAddr]) -> Vec<EntryRow> {
    if only.is_empty() {
        snapshot
            .entries()
            .into_iter()
            .map(|(address, zone)| EntryRow {
                address,
                zone: zone.to_string(),
            })
            .collect()
    } else {
        only.iter()
            .map(|address| EntryRow {
                address: *address,
                zone: snapshot
                    .zone_of(*address)
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            })
            .collect()
    }
}

pub async fn execute(ctx: Context, args: DirectoryArgs) -> Result<()> {
    if ctx.explain {
        Explain::directory(&ctx.platform().probe_root).print();
    }

    let catalog: Arc<dyn ZoneCatalog> = Arc::new(ctx.catalog()?);
    let resolver = Arc::new(cczone::HickoryResolver::from_system_conf()?);
    let directory = ZoneDirectory::new(ctx.platform().clone(), catalog, resolver);

    let summary = directory.refresh().await?;
    let snapshot = directory
        .snapshot()
        .await
        .ok_or_else(|| anyhow::anyhow!("directory is still cold after a refresh"))?;

    let rows = rows(&snapshot, &args.address);

    match ctx.output_format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "refreshed_at": summary.refreshed_at,
                "zones": summary.zones,
                "failed_probes": summary.failed_probes,
                "entries": rows,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&rows)?);
        }
        OutputFormat::Csv => {
            println!("address,zone");
            for row in &rows {
                println!("{},{}", row.address, row.zone);
            }
        }
        OutputFormat::Pretty => {
            println!(
                "{} {} addresses in {} zones (refreshed {})",
                "Directory:".bold(),
                summary.addresses.to_string().cyan(),
                summary.zones.to_string().cyan(),
                summary.refreshed_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            if summary.failed_probes > 0 {
                println!(
                    "{}",
                    format!("{} zone probe(s) failed and were skipped", summary.failed_probes).yellow()
                );
            }
            println!();

            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }

    Ok(())
}
