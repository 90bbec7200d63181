use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use boundary_centers::batch::{FailurePolicy, compute_centers};
use boundary_centers::config::FileConfig;
use boundary_centers::output::{CsvOptions, OutputFormat, write_centers};
use boundary_centers::svg::{ExtractOptions, read_regions};

/// Estimate region centers from the boundary paths of an SVG map
///
/// Every <path> element contributes one region: its identifier attribute
/// names the region and its `d` attribute is the boundary. Each center is the
/// perimeter-weighted average of the boundary's edge midpoints.
///
/// Examples:
///   # County centers from a FIPS-labelled map
///   boundary-centers USA_Counties.svg -o USA_Counties_with_FIPS_and_centers.csv
///
///   # JSON output, stop at the first malformed boundary
///   boundary-centers map.svg --format json --on-error abort
///
///   # Use a config file
///   boundary-centers --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "boundary-centers")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input SVG document
    input: Option<PathBuf>,

    /// Path to config file (optional, auto-searches boundary-centers.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file path (defaults to {input}_centers.{csv,json})
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: csv or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Failure policy for malformed or degenerate boundaries: skip or abort
    #[arg(long)]
    on_error: Option<FailurePolicy>,

    /// Attribute of <path> holding the region identifier
    #[arg(long)]
    id_attribute: Option<String>,

    /// Omit the CSV header row
    #[arg(long)]
    no_header: bool,

    /// Decimal places for CSV coordinates (default: shortest exact form)
    #[arg(long)]
    precision: Option<usize>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::from_file(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let Some(input) = args.input.clone().or(file_config.input.clone()) else {
        bail!("No input SVG given. Pass a path or set `input` in the config file");
    };
    let format = args.format.unwrap_or(file_config.format);
    let policy = args.on_error.unwrap_or(file_config.on_error);
    let id_attribute = args
        .id_attribute
        .clone()
        .unwrap_or_else(|| file_config.id_attribute.clone());
    let csv_options = CsvOptions {
        header: !args.no_header && file_config.header,
        precision: args.precision.or(file_config.precision),
    };
    let verbose = args.verbose || file_config.verbose;
    let output_path = args
        .output
        .clone()
        .or(file_config.output.clone())
        .unwrap_or_else(|| default_output_path(&input, format));

    println!("boundary-centers - Region Center Estimator");
    println!("==========================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input.display());
        println!("  Output: {}", output_path.display());
        println!("  Format: {:?}", format);
        println!("  On error: {:?}", policy);
        println!("  Id attribute: {}", id_attribute);
        if format == OutputFormat::Csv {
            println!("  Header: {}", csv_options.header);
            match csv_options.precision {
                Some(p) => println!("  Precision: {} decimals", p),
                None => println!("  Precision: exact"),
            }
        }
        println!();
    }

    let spinner = create_spinner("Reading SVG boundaries...");
    let start = Instant::now();
    let options = ExtractOptions::default().with_id_attribute(id_attribute);
    let regions = read_regions(&input, &options)?;
    if regions.is_empty() {
        bail!(
            "No <path> elements with a `{}` attribute found in {}",
            options.id_attribute,
            input.display()
        );
    }
    spinner.finish_with_message(format!(
        "Read {} regions [{:.1}s]",
        regions.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Estimating centers...");
    let start = Instant::now();
    let report = match compute_centers(&regions, policy) {
        Ok(report) => report,
        Err(e) => {
            spinner.abandon_with_message("Center estimation aborted");
            return Err(e).context("Failed to compute region centers");
        }
    };
    spinner.finish_with_message(format!(
        "Computed {} centers, skipped {} [{:.1}s]",
        report.centers.len(),
        report.failures.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose && !report.failures.is_empty() {
        println!("  Skipped regions:");
        for failure in &report.failures {
            println!("    {}: {}", failure.id, failure.error);
        }
    }

    let spinner = create_spinner("Writing centers...");
    let start = Instant::now();
    write_centers(&output_path, &report.centers, format, &csv_options)
        .context("Failed to write centers")?;
    spinner.finish_with_message(format!(
        "Wrote {} rows [{:.1}s]",
        report.centers.len(),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_path.display());
    if !report.failures.is_empty() {
        println!(
            "{} of {} regions were skipped (run with -v for details)",
            report.failures.len(),
            report.total()
        );
    }

    Ok(())
}

fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "regions".to_string());
    input.with_file_name(format!("{}_centers.{}", stem, format.extension()))
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
