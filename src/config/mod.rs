//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, user agent, export naming)
//! - The library `Config` and its validation
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Cli, Command, Config, ConfigValidationError, DorkCommand, LogFormat, LogLevel, PreviewArgs,
    ScanArgs,
};
