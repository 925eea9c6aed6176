//! Export CLI command

use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{ContactError, ContactResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format, one row per contact
    Csv,
    /// JSON format
    Json,
    /// YAML format, human-readable
    Yaml,
}

/// Export the stored address book to a file
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
) -> ContactResult<()> {
    let book = storage.load_book()?;

    let file = File::create(output).map_err(|e| {
        ContactError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_csv(&book, &mut writer)?,
        ExportFormat::Json => export_json(&book, &mut writer, true)?,
        ExportFormat::Yaml => export_yaml(&book, &mut writer)?,
    }

    println!("Exported {} contact(s) to: {}", book.len(), output.display());
    Ok(())
}
