//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::dns::RecordType;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of one of the four primary DNS lookups.
///
/// Any variant aborts the whole scan: no partial record set is ever returned.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The request could not be sent or the response body could not be read
    /// (connection refused, DNS failure of the endpoint itself, timeout).
    #[error("{record_type} lookup for {domain} failed: {source}")]
    Transport {
        domain: String,
        record_type: RecordType,
        #[source]
        source: ReqwestError,
    },

    /// The service answered with a non-success HTTP status.
    #[error("{record_type} lookup for {domain} returned HTTP {status}")]
    Status {
        domain: String,
        record_type: RecordType,
        status: u16,
    },

    /// The response body was not the expected JSON document.
    #[error("{record_type} lookup for {domain} returned malformed JSON: {source}")]
    Decode {
        domain: String,
        record_type: RecordType,
        #[source]
        source: serde_json::Error,
    },
}

impl NetworkError {
    /// Record type of the lookup that failed.
    pub fn record_type(&self) -> RecordType {
        match self {
            NetworkError::Transport { record_type, .. }
            | NetworkError::Status { record_type, .. }
            | NetworkError::Decode { record_type, .. } => *record_type,
        }
    }

    /// True if the transport gave up waiting for the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Transport { source, .. } if source.is_timeout())
    }
}

/// Failure of the geolocation enrichment step.
///
/// Never surfaced to callers of the resolver; it is logged and recorded as
/// [`GeolocationStatus::Failed`](crate::GeolocationStatus::Failed).
#[derive(Error, Debug)]
pub enum GeolocationError {
    #[error("geolocation request for {ip} failed: {source}")]
    Transport {
        ip: String,
        #[source]
        source: ReqwestError,
    },

    #[error("geolocation service returned HTTP {status} for {ip}")]
    Status { ip: String, status: u16 },

    #[error("geolocation response for {ip} is malformed: {source}")]
    Decode {
        ip: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered but could not locate the address.
    #[error("geolocation service rejected {ip}: {reason}")]
    Rejected { ip: String, reason: String },
}

/// The dork generator was asked for something it cannot produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelectionError {
    #[error("unknown dork category '{0}'")]
    UnknownCategory(String),

    #[error("dork target must not be blank")]
    BlankTarget,
}
