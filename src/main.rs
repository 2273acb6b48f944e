//! CLI entry point for the card harvester.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use harvester_core::catalog::{CardRecordBuilder, SetCodeResolver, SetCodeTable};
use harvester_core::fetch::PageClient;
use harvester_core::harvest::Harvester;
use harvester_core::{CardStore, Database, logging};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    logging::init(
        logging::default_level(args.verbose, args.quiet),
        args.log_file.as_deref(),
    )
    .context("failed to initialise logging")?;

    debug!(?args, "CLI arguments parsed");
    let started = Instant::now();

    let table = match &args.set_codes {
        Some(path) => SetCodeTable::load(path)?,
        None => SetCodeTable::builtin()?,
    };
    info!(set_codes = table.len(), "set-code table loaded");

    let client = PageClient::new(&args.fetch_config()).context("failed to build HTTP client")?;
    let harvester = Harvester::new(
        Arc::new(client),
        CardRecordBuilder::new(SetCodeResolver::new(Arc::new(table))),
    );

    let links = harvester
        .discover(&args.index_url)
        .await
        .context("cannot harvest without the set index")?;

    let report = harvester.harvest_all(&links).await;

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report.records)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write records to {}", path.display()))?;
        info!(path = %path.display(), records = report.records.len(), "records written");
    }

    if let Some(path) = &args.db {
        let db = Database::new(path)
            .await
            .with_context(|| format!("failed to open database {}", path.display()))?;
        let store = CardStore::new(db.clone());
        let saved = store.save(&report.records).await?;
        info!(path = %path.display(), cards = saved, "records saved");
        db.close().await;
    }

    info!(
        records = report.records.len(),
        pages_fetched = report.pages_fetched(),
        pages_failed = report.pages_failed(),
        rows_skipped = report.rows_skipped(),
        elapsed_secs = started.elapsed().as_secs_f64(),
        "Harvest finished"
    );

    Ok(())
}
