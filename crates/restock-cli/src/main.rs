//! `restock` command line interface.
//!
//! Reads a stock snapshot, runs the rebalancing solver with progress
//! rendered to stdout, and writes the transfer plan:
//!
//! ```text
//! restock -i stock.csv -o transfers.csv -n 4 -m 20 --de-stock Oslo
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{anyhow, Context};
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use restock_config::RebalanceSettings;
use restock_io::{ensure_csv_extension, read_stock_file, CsvExporter};
use restock_solver::RebalanceSolver;

/// Propose stock transfers between locations to raise on-shelf
/// availability.
#[derive(Debug, Parser)]
#[command(name = "restock", version, about)]
struct Cli {
    /// Input stock file (rows of `Location, Product, OnHand, Target`)
    #[arg(short, long)]
    input: PathBuf,

    /// Output transfer file; `.csv` is appended when missing
    #[arg(short, long)]
    output: Option<String>,

    /// Max transfers one location can send
    #[arg(short = 'n', long = "max-to")]
    max_to: Option<u32>,

    /// Minimum item count to initiate a transfer
    #[arg(short = 'm', long = "min-products")]
    min_products: Option<u32>,

    /// Locations to secure stock in (comma separated)
    #[arg(long = "secure-stock", value_delimiter = ',')]
    secure_stock: Vec<String>,

    /// Locations to reduce stock in (comma separated)
    #[arg(long = "de-stock", value_delimiter = ',')]
    de_stock: Vec<String>,

    /// Settings file (TOML, or YAML by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: error | warn | info | debug | trace
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let settings = build_settings(&cli)?;
    tracing::debug!(?settings, "resolved settings");

    let stock = read_stock_file(&cli.input)
        .with_context(|| format!("reading stock from {}", cli.input.display()))?;

    let solver = RebalanceSolver::new(settings);
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let worker = thread::spawn(move || solver.solve_with_progress(&stock, sender));

    while let Some(percent) = receiver.blocking_recv() {
        print!("\rProgress: {percent}%");
        let _ = io::stdout().flush();
    }
    let outcome = worker
        .join()
        .map_err(|_| anyhow!("solver thread panicked"))?;

    println!("\rProgress: 100%");
    println!("OSA increased: +{:.2}%", outcome.osa_increase);

    let output = cli.output.unwrap_or_else(default_output_name);
    let path = ensure_csv_extension(&output);
    CsvExporter::to_file(&outcome.transfers, &path)
        .with_context(|| format!("writing transfer plan to {}", path.display()))?;
    println!("Transfer plan written to {}", path.display());

    Ok(())
}

/// Merges settings from the optional file with explicit flags; flags
/// win over file values, file values over defaults.
fn build_settings(cli: &Cli) -> anyhow::Result<RebalanceSettings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings_file(path)?,
        None => RebalanceSettings::default(),
    };

    if let Some(max_to) = cli.max_to {
        settings.max_outgoing_transfers = max_to;
    }
    if let Some(min_products) = cli.min_products {
        settings.min_products_per_transfer = min_products;
    }
    settings.secure_locations.extend(cli.secure_stock.iter().cloned());
    settings.destock_locations.extend(cli.de_stock.iter().cloned());

    settings.validate()?;
    Ok(settings)
}

fn load_settings_file(path: &Path) -> anyhow::Result<RebalanceSettings> {
    let settings = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => RebalanceSettings::from_yaml_file(path),
        _ => RebalanceSettings::from_toml_file(path),
    };
    settings.with_context(|| format!("loading settings from {}", path.display()))
}

fn default_output_name() -> String {
    format!("transfers-{}.csv", chrono::Local::now().to_rfc3339())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
