//! Import command - parse an OCR text file and push the areas into the remote store.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use rocagem_core::import::append_log;
use rocagem_core::{HeuristicAreaParser, ImportResult, Importer, ServiceArea};

use crate::store::SupabaseStore;

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Input file with the OCR text of one sheet
    #[arg(required = true)]
    input: PathBuf,

    /// Base URL of the store (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Target table (overrides config)
    #[arg(long)]
    table: Option<String>,

    /// API key of the store
    #[arg(long, env = "ROCAGEM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Records per batch (overrides config)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Pause between batches in milliseconds (overrides config)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Where to append the JSON import log (overrides config)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the mapped service areas instead of sending them
    #[arg(long)]
    dry_run: bool,
}

pub async fn run(args: ImportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(url) = args.url {
        config.import.url = url;
    }
    if let Some(table) = args.table {
        config.import.table = table;
    }
    if let Some(batch_size) = args.batch_size {
        config.import.batch_size = batch_size;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.import.batch_delay_ms = delay_ms;
    }
    if let Some(log) = args.log {
        config.import.log_path = log;
    }
    config.validate()?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = fs::read_to_string(&args.input)?;
    let extraction = HeuristicAreaParser::with_config(config.extraction.clone()).process(&text);
    super::process::print_summary(&extraction);

    if extraction.records.is_empty() {
        eprintln!("{} No areas to import", style("!").yellow());
        return Ok(());
    }

    if args.dry_run {
        let now = Utc::now();
        let areas: Vec<ServiceArea> = extraction
            .records
            .iter()
            .map(|record| ServiceArea::from_record(record, now))
            .collect();
        println!("{}", serde_json::to_string_pretty(&areas)?);
        return Ok(());
    }

    let Some(api_key) = args.api_key else {
        anyhow::bail!("An API key is required: pass --api-key or set ROCAGEM_API_KEY");
    };

    let store = SupabaseStore::from_config(&config.import, api_key);
    info!("Importing {} areas into {}", extraction.records.len(), store.endpoint());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Importing {} areas...", extraction.records.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut importer = Importer::from_config(store, &config.import);
    let result = importer.import(&extraction.records).await;

    spinner.finish_and_clear();

    append_log(&config.import.log_path, importer.log())?;
    print_import_result(&result);
    eprintln!(
        "{} Log written to {}",
        style("✓").green(),
        config.import.log_path.display()
    );

    if result.success == 0 && result.errors > 0 {
        anyhow::bail!("Import failed for all {} areas", result.errors);
    }

    Ok(())
}

fn print_import_result(result: &ImportResult) {
    eprintln!();
    eprintln!(
        "{} Total: {} | Imported: {} | Skipped: {} | Errors: {}",
        style("ℹ").blue(),
        result.total,
        style(result.success).green(),
        style(result.skipped).yellow(),
        style(result.errors).red()
    );

    if !result.error_details.is_empty() {
        eprintln!("{}", style("Failures:").red());
        for detail in result.error_details.iter().take(5) {
            eprintln!("  - {}", detail);
        }
        if result.error_details.len() > 5 {
            eprintln!("  ... and {} more", result.error_details.len() - 5);
        }
    }
}
