//! Process command - parse area records from a single OCR text file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use rocagem_core::area::rules::patterns::format_br_decimal;
use rocagem_core::{AreaRecord, ExtractionResult, HeuristicAreaParser, ProcessingSummary};

/// Number of line diagnostics printed before collapsing the rest.
const MAX_PRINTED_ERRORS: usize = 5;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file with the OCR text of one sheet
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print accepted/skipped counts and line diagnostics to stderr
    #[arg(long)]
    summary: bool,

    /// Minimum number of columns a data line must split into
    #[arg(long)]
    min_fields: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text listing
    Text,
}

impl OutputFormat {
    /// File extension used when writing this format to disk.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let mut parser = HeuristicAreaParser::with_config(config.extraction);
    if let Some(min_fields) = args.min_fields {
        parser = parser.with_min_fields(min_fields);
    }
    let result = parser.process(&text);

    let output = format_records(&result.records, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.summary {
        print_summary(&result);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Print the processing summary of one parse to stderr.
pub fn print_summary(result: &ExtractionResult) {
    let summary: &ProcessingSummary = &result.summary;

    eprintln!();
    eprintln!(
        "{} Accepted: {} | Skipped: {} | Success rate: {:.2}%",
        style("ℹ").blue(),
        style(summary.accepted_count).green(),
        style(summary.skipped_count).yellow(),
        summary.success_rate_percent
    );
    eprintln!(
        "{} Processing time: {}ms",
        style("ℹ").blue(),
        result.processing_time_ms
    );

    if !summary.errors.is_empty() {
        eprintln!("{}", style("Rejected lines:").yellow());
        for error in summary.errors.iter().take(MAX_PRINTED_ERRORS) {
            eprintln!("  - {}", error);
        }
        if summary.errors.len() > MAX_PRINTED_ERRORS {
            eprintln!("  ... and {} more", summary.errors.len() - MAX_PRINTED_ERRORS);
        }
    }
}

/// Render parsed records in the requested format.
pub fn format_records(records: &[AreaRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(format_text(records)),
    }
}

fn format_csv(records: &[AreaRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "item_type",
        "address",
        "district",
        "area_m2",
        "latitude",
        "longitude",
        "lot_number",
        "notes",
    ])?;

    for record in records {
        wtr.write_record([
            record.item_type.as_str(),
            record.address.as_str(),
            record.district.as_str(),
            &record.area_m2.to_string(),
            &optional_number(record.latitude),
            &optional_number(record.longitude),
            &record.lot_number.to_string(),
            record.notes.as_deref().unwrap_or(""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn format_text(records: &[AreaRecord]) -> String {
    let mut output = String::new();

    for (index, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} - {}\n",
            index + 1,
            record.item_type.to_uppercase(),
            record.address
        ));
        output.push_str(&format!("   District: {}\n", record.district));
        output.push_str(&format!("   Area: {} m²\n", format_br_decimal(record.area_m2)));
        if let Some(point) = record.coordinates {
            output.push_str(&format!(
                "   Coordinates: {:.6}, {:.6}\n",
                point.latitude, point.longitude
            ));
        }
        output.push_str(&format!("   Lot: {}\n", record.lot_number));
        if let Some(notes) = &record.notes {
            output.push_str(&format!("   Notes: {}\n", notes));
        }
    }

    output.push_str(&format!("\nTotal: {} areas\n", records.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AreaRecord {
        AreaRecord {
            item_type: "praça".to_string(),
            address: "rua carijós, com rua xavantes".to_string(),
            district: "unspecified".to_string(),
            area_m2: 2332.83,
            latitude: Some(-23.3043262),
            longitude: None,
            lot_number: 1,
            notes: None,
            coordinates: None,
        }
    }

    #[test]
    fn test_csv_quotes_commas_and_blanks_missing_values() {
        let csv = format_records(&[record()], OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("item_type,address,district,area_m2,latitude,longitude,lot_number,notes")
        );
        assert_eq!(
            lines.next(),
            Some("praça,\"rua carijós, com rua xavantes\",unspecified,2332.83,-23.3043262,,1,")
        );
    }

    #[test]
    fn test_text_listing() {
        let text = format_records(&[record()], OutputFormat::Text).unwrap();

        assert!(text.starts_with("1. PRAÇA - rua carijós, com rua xavantes\n"));
        assert!(text.contains("Area: 2.332,83 m²"));
        assert!(!text.contains("Coordinates"));
        assert!(text.ends_with("Total: 1 areas\n"));
    }

    #[test]
    fn test_json_empty_list() {
        assert_eq!(format_records(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
