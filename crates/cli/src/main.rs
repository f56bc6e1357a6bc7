//! API Endpoint Counter CLI
//!
//! Command-line interface for counting the endpoints of a Postman collection
//! or Swagger/OpenAPI document and rendering an HTML report.

use anyhow::{Context, Result};
use api_endpoint_counter_common::{Aggregate, CounterError, DocumentKind, Histogram};
use api_endpoint_counter_parser::ApiDocument;
use api_endpoint_counter_report::{ReportOptions, ReportRenderer, DEFAULT_TITLE};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use colored::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "api-endpoint-counter")]
#[command(
    version,
    about = "Generate an API-call report from a Postman collection or Swagger/OpenAPI document",
    long_about = None
)]
#[command(after_help = "EXAMPLES:\n  \
    # Report on an OpenAPI document\n  \
    api-endpoint-counter --input openapi.yaml\n\n  \
    # Report on a Postman collection with a custom title\n  \
    api-endpoint-counter -i shop.postman_collection.json -o shop.html --title \"Shop API\"")]
struct Cli {
    /// JSON/YAML file (Postman collection or Swagger/OpenAPI document)
    #[arg(short, long)]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "report.html")]
    output: PathBuf,

    /// Document format (auto-detected if not specified)
    #[arg(short, long)]
    format: Option<FormatArg>,

    /// Report title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Also write the counts as JSON to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Postman collection (v2.0 / v2.1)
    Postman,
    /// Swagger 2.0 or OpenAPI 3.x
    #[value(alias = "swagger")]
    Openapi,
}

impl From<FormatArg> for DocumentKind {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Postman => DocumentKind::Postman,
            FormatArg::Openapi => DocumentKind::Swagger,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match run(&cli) {
        Err(e) if is_unrecognized_format(&e) => Cli::command()
            .error(
                ErrorKind::InvalidValue,
                "Unrecognized file format - must be Postman or OpenAPI.",
            )
            .exit(),
        result => result,
    }
}

fn is_unrecognized_format(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<CounterError>(),
        Some(CounterError::UnrecognizedFormat(_))
    )
}

fn run(cli: &Cli) -> Result<()> {
    println!("{} Reading input: {}", "→".cyan(), cli.input.display());

    let document = ApiDocument::from_file(&cli.input, cli.format.map(DocumentKind::from))
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    if cli.format.is_none() {
        println!(
            "{} Auto-detected format: {}",
            "→".cyan(),
            document.kind().to_string().yellow()
        );
    }

    let extraction = document.extract();
    println!(
        "{} Counted {} endpoints",
        "✓".green(),
        extraction.aggregate.total
    );

    if cli.verbose {
        if extraction.skipped > 0 {
            println!(
                "{} Skipped {} entries without a usable endpoint",
                "⚠".yellow(),
                extraction.skipped
            );
        }
        print_breakdown(&extraction.aggregate);
    }

    let options = ReportOptions {
        title: cli.title.clone(),
        source: cli
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        kind: Some(document.kind()),
    };

    let renderer = ReportRenderer::new(options).context("Failed to create renderer")?;
    let html = renderer
        .render(&extraction.aggregate)
        .context("Failed to generate report")?;
    let json = cli
        .json
        .as_ref()
        .map(|path| counts_json(&extraction.aggregate).map(|json| (path, json)))
        .transpose()?;

    fs::write(&cli.output, html)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    if let Some((json_path, json)) = json {
        if let Err(e) = fs::write(json_path, json) {
            let _ = fs::remove_file(&cli.output);
            return Err(e).with_context(|| format!("Failed to write {}", json_path.display()));
        }
        println!("{} JSON written: {}", "✓".green(), json_path.display());
    }

    println!(
        "\n{} Report generated: {}",
        "✓".green().bold(),
        cli.output.display()
    );

    Ok(())
}

fn counts_json(aggregate: &Aggregate) -> Result<String> {
    serde_json::to_string_pretty(aggregate).context("Failed to serialize counts")
}

fn print_breakdown(aggregate: &Aggregate) {
    print_histogram("By HTTP Method", &aggregate.methods, |key| key.to_string());
    print_histogram("By Endpoint", &aggregate.endpoints, |key| key.to_string());
    print_histogram("By Base Path", &aggregate.bases, |key| format!("/{}/*", key));
}

fn print_histogram(heading: &str, histogram: &Histogram, label: impl Fn(&str) -> String) {
    println!("\n{}", heading.bold());
    for (key, count) in histogram.iter() {
        println!("  • {} {}", label(key).cyan(), count);
    }
}
