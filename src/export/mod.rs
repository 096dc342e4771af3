//! Export functionality for scan results.
//!
//! This module renders a scan result to JSON (nested, lossless) or CSV
//! (one row per record) and writes it to `<domain>_analysis.<ext>`.

mod csv;
mod json;
mod types;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

use crate::config::EXPORT_FILE_SUFFIX;
use crate::dns::{DomainName, ResolutionResult};

pub use self::csv::{export_csv, CSV_HEADER};
pub use json::{export_json, import_json};
pub use types::ExportFormat;

/// File name of an export, e.g. `example.com_analysis.json`.
pub fn export_file_name(domain: &DomainName, format: ExportFormat) -> String {
    format!("{domain}{EXPORT_FILE_SUFFIX}.{}", format.extension())
}

/// Renders `result` in `format`.
pub fn render(result: &ResolutionResult, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => export_json(result),
        ExportFormat::Csv => export_csv(result),
    }
}

/// Writes `result` to `<dir>/<domain>_analysis.<ext>`, replacing any
/// existing file.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Fails if the domain would not form a plain file name inside `dir` (it
/// contains a path separator or a `..` component), or if the write fails.
pub fn write_export(
    dir: &Path,
    domain: &DomainName,
    result: &ResolutionResult,
    format: ExportFormat,
) -> Result<PathBuf> {
    let file_name = export_file_name(domain, format);
    if Path::new(&file_name).file_name() != Some(OsStr::new(&file_name)) {
        bail!(
            "Refusing to export '{domain}': '{file_name}' is not a plain file name inside {}",
            dir.display()
        );
    }

    let content = render(result, format)?;
    let path = dir.join(file_name);
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    info!("Exported {domain} results to {}", path.display());
    Ok(path)
}
