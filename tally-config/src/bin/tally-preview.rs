//! `tally-preview`: prints a JSON record set as a sorted table, replaying
//! header clicks given with `--sort`.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tally_config::{ConfigLoader, TextTableView};
use tally_contracts::events::TableEvent;
use tally_core::SortableTable;
use tally_model::{RawRecord, SortColumn};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "tally-preview",
    about = "Print a JSON record set as a sorted table"
)]
struct Cli {
    /// JSON array of {location, month, year, total} objects
    #[arg(long)]
    input: PathBuf,
    /// Config file (otherwise TALLY_CONFIG_PATH / TALLY_CONFIG_JSON / tally.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Header clicks to replay, in order (location, month, year, total)
    #[arg(long = "sort")]
    sorts: Vec<SortColumn>,
    /// Print the ordered records as JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tally_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let loader = ConfigLoader::default();
    let load = match &cli.config {
        Some(path) => loader.load_explicit(path)?,
        None => loader.load_from_env()?,
    };

    let contents = fs::read_to_string(&cli.input).with_context(|| {
        format!("failed to read records from {}", cli.input.display())
    })?;
    let raw: Vec<RawRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid records in {}", cli.input.display()))?;
    info!(records = raw.len(), "loaded raw records");

    let view = TextTableView::new(load.config.display.clone());
    let mut table = SortableTable::from_raw(raw, load.config.table, view);
    for column in cli.sorts {
        table.handle(TableEvent::RequestSort(column));
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(table.rows())?);
    } else {
        print!("{}", table.view().frame());
    }

    Ok(())
}
