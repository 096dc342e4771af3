//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - the logger
//! - the HTTP client
//! - the resolver built on top of both

mod client;
mod logger;

use crate::config::Config;
use crate::dns::Resolver;
use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the HTTP client and the resolver that uses it.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_resolver(config: &Config) -> Result<Resolver, InitializationError> {
    let client = init_client(config)?;
    Ok(Resolver::from_config(client, config))
}
