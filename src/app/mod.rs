//! Main application modules.
//!
//! This module provides the explicit application state (tabs, scans, dork
//! builder) and the text rendering used by the binary.

pub mod report;
pub mod state;

// Re-export public API
pub use report::{format_dorks, format_operators, format_scan_report};
pub use state::{AppState, ScanState, ScanTicket, ScanUpdate, Tab};
