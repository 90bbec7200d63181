pub mod csv;
pub mod json;

pub use self::csv::{CsvOptions, write_csv};
pub use self::json::write_json;

use crate::batch::RegionCenter;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `id,x,y` rows
    #[default]
    Csv,
    /// JSON array of center records
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Write region centers to a file in the given format
pub fn write_centers(
    path: &Path,
    centers: &[RegionCenter],
    format: OutputFormat,
    csv_options: &CsvOptions,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => write_csv(&mut writer, centers, csv_options)?,
        OutputFormat::Json => write_json(&mut writer, centers)?,
    }

    writer.flush()?;
    Ok(())
}
