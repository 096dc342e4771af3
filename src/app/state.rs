//! Application state and its transitions.
//!
//! Everything the panel kept in component state lives here: the active tab,
//! the current scan, the manual dork fields and the generator selection.
//! Scans are tagged with a monotonically increasing sequence number; a
//! completion whose ticket is not the latest one is discarded.

use log::debug;

use crate::config::SCAN_FAILED_MESSAGE;
use crate::dns::{DomainName, ScanOutcome};
use crate::dork::{compose_preview, generate, DorkCategory, DorkField, DorkFields};
use crate::error_handling::{InvalidSelectionError, NetworkError};

/// The two tools of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Domain,
    Dorking,
}

impl Tab {
    pub const fn label(self) -> &'static str {
        match self {
            Tab::Domain => "TOOLS",
            Tab::Dorking => "Google Dorking",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Tab::Domain => "Domain Analyzer",
            Tab::Dorking => "Advanced Search Operators",
        }
    }
}

/// Handle for one in-flight scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTicket {
    sequence: u64,
    domain: DomainName,
}

impl ScanTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn domain(&self) -> &DomainName {
        &self.domain
    }
}

/// Where the domain analyzer currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning {
        sequence: u64,
        domain: DomainName,
    },
    Completed(ScanOutcome),
    Failed {
        domain: DomainName,
        /// User-facing message
        message: String,
        /// Underlying error, for logs and verbose output
        detail: String,
    },
}

/// Whether a scan completion was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanUpdate {
    Applied,
    /// A newer scan was started after this one; the completion was dropped
    Stale,
}

#[derive(Debug, Default)]
pub struct AppState {
    active_tab: Tab,
    last_sequence: u64,
    scan: ScanState,
    dork_fields: DorkFields,
    selected_category: Option<DorkCategory>,
    target: String,
    generated: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn scan(&self) -> &ScanState {
        &self.scan
    }

    /// Starts a scan of `input`.
    ///
    /// Blank input is a no-op and returns `None`. Otherwise any previous
    /// result or error is cleared and a ticket for the new scan is returned.
    pub fn begin_scan(&mut self, input: &str) -> Option<ScanTicket> {
        let domain = DomainName::parse(input)?;
        self.last_sequence += 1;
        self.scan = ScanState::Scanning {
            sequence: self.last_sequence,
            domain: domain.clone(),
        };
        Some(ScanTicket {
            sequence: self.last_sequence,
            domain,
        })
    }

    /// Records the completion of the scan identified by `ticket`.
    pub fn finish_scan(
        &mut self,
        ticket: ScanTicket,
        result: Result<ScanOutcome, NetworkError>,
    ) -> ScanUpdate {
        if ticket.sequence != self.last_sequence {
            debug!(
                "Discarding stale scan #{} of {} (latest is #{})",
                ticket.sequence, ticket.domain, self.last_sequence
            );
            return ScanUpdate::Stale;
        }

        self.scan = match result {
            Ok(outcome) => ScanState::Completed(outcome),
            Err(e) => ScanState::Failed {
                domain: ticket.domain,
                message: SCAN_FAILED_MESSAGE.to_string(),
                detail: e.to_string(),
            },
        };
        ScanUpdate::Applied
    }

    /// Outcome of the latest scan, if it completed successfully.
    pub fn outcome(&self) -> Option<&ScanOutcome> {
        match &self.scan {
            ScanState::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.scan, ScanState::Scanning { .. })
    }

    pub fn dork_fields(&self) -> &DorkFields {
        &self.dork_fields
    }

    pub fn set_field(&mut self, field: DorkField, value: impl Into<String>) {
        self.dork_fields.set(field, value);
    }

    pub fn reset_fields(&mut self) {
        self.dork_fields.reset();
    }

    /// Live preview of the manual builder.
    pub fn preview(&self) -> String {
        compose_preview(&self.dork_fields)
    }

    pub fn select_category(&mut self, category: Option<DorkCategory>) {
        self.selected_category = category;
    }

    pub fn selected_category(&self) -> Option<DorkCategory> {
        self.selected_category
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    /// True when a category is selected and the target is not blank.
    pub fn can_generate(&self) -> bool {
        self.selected_category.is_some() && !self.target.trim().is_empty()
    }

    /// Generates dorks for the current selection.
    ///
    /// # Errors
    ///
    /// Fails closed: on an invalid selection the generated list is emptied
    /// and the error returned.
    pub fn generate(&mut self) -> Result<&[String], InvalidSelectionError> {
        let outcome = match self.selected_category {
            Some(category) => generate(category, &self.target),
            None => Err(InvalidSelectionError::UnknownCategory(String::new())),
        };
        match outcome {
            Ok(dorks) => {
                self.generated = dorks;
                Ok(self.generated.as_slice())
            }
            Err(e) => {
                self.generated.clear();
                Err(e)
            }
        }
    }

    pub fn generated(&self) -> &[String] {
        &self.generated
    }
}
