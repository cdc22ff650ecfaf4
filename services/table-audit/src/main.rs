//! Parameter table audit tool.
//!
//! Loads a candidate parameter table and a reference authority table from
//! YAML and prints the reconciliation report. Exits nonzero when naming or
//! unit discrepancies are found, so the audit can gate table updates.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use param_tables::{load_table, standard_table, SiUnitSystem, TableReconciler};

#[derive(Parser, Debug)]
#[command(name = "table-audit")]
#[command(about = "Compare a parameter table against a reference authority")]
struct Args {
    /// Candidate table YAML file
    #[arg(short, long)]
    candidate: PathBuf,

    /// Reference table YAML file (default: the standard authority table)
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Log to stderr; stdout carries the report.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let candidate = load_table(&args.candidate)?;
    let reference = match &args.reference {
        Some(path) => std::sync::Arc::new(load_table(path)?),
        None => standard_table()?,
    };
    info!(
        candidate = %candidate.name(),
        reference = %reference.name(),
        "Loaded parameter tables"
    );

    let units = SiUnitSystem::new();
    let report = TableReconciler::new(&units).reconcile(&candidate, &reference);
    print!("{}", report);

    if report.has_conflicts() {
        info!(
            conflicts = report.conflict,
            udunits = report.udunits_mismatch,
            "Audit found discrepancies"
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
