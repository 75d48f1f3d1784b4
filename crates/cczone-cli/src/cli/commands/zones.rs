//! `cczone zones` - List the platform's deployment zones.

use anyhow::Result;
use cczone::ZoneRecord;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::education::Explain;
use crate::output::{csv_field, OutputFormat};

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "Zone")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&ZoneRecord> for ZoneRow {
    fn from(record: &ZoneRecord) -> Self {
        Self {
            name: record.name.clone(),
            location: record.label().to_string(),
            country: record.country_code.clone().unwrap_or_default(),
            tags: record.tags.join(", "),
        }
    }
}

pub async fn execute(ctx: Context) -> Result<()> {
    if ctx.explain {
        Explain::zones().print();
    }

    let catalog = ctx.catalog()?;
    let zones = catalog.zones().list().await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&zones)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&zones)?);
        }
        OutputFormat::Csv => {
            println!("name,city,country_code,tags");
            for zone in &zones {
                println!(
                    "{},{},{},{}",
                    zone.name,
                    csv_field(zone.city.as_deref().unwrap_or("")),
                    zone.country_code.as_deref().unwrap_or(""),
                    csv_field(&zone.tags.join(";"))
                );
            }
        }
        OutputFormat::Pretty => {
            println!("{} {}", "Zones:".bold(), zones.len().to_string().cyan());
            println!();

            let rows: Vec<ZoneRow> = zones.iter().map(ZoneRow::from).collect();
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }

    Ok(())
}
