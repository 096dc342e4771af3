//! Export types.

use clap::ValueEnum;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON of the full result (nested, round-trips)
    Json,
    /// One row per record (flattened view for Excel/Sheets)
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
