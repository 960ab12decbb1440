use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use analytics::ReportEngine;
use analytics::enrich::enrich_and_sort;
use configuration::load_config;
use storage::{RecordStore, ReportStore, render_report};

/// The main entry point for the Meridian analysis application.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report => run_report(),
    }
}

/// A batch performance-report generator for closed trading positions.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse the results log and emit the performance report.
    Report,
}

/// Orchestrates one full report run: decode, enrich, compute, persist,
/// print. Any failure aborts the run; a partial report is never written.
fn run_report() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;

    let record_store = RecordStore::new(&config.report.results_file);
    let batches = record_store
        .load_batches()
        .context("failed to load the results log")?;
    info!(batches = batches.len(), "results log decoded");

    let positions = enrich_and_sort(&batches).context("position enrichment failed")?;
    info!(positions = positions.len(), "positions enriched and ordered");

    let engine = ReportEngine::new();
    let report = engine
        .assemble(&positions, config.report.risk_free_monthly_rate)
        .context("report assembly failed")?;

    ReportStore::new(&config.report.analysis_file)
        .save(&report)
        .context("failed to persist the analysis report")?;

    println!("{}", render_report(&report));

    Ok(())
}
