//! Domain resolution with geolocation enrichment.
//!
//! A scan issues the four primary lookups (A, AAAA, MX, TXT) concurrently and
//! waits for all of them. The first failure aborts the scan. If at least one
//! IPv4 address came back, the first one is geolocated; that step can fail
//! without affecting the records.

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::Client;

use super::records::{
    lookup_address_records, lookup_mx_records, lookup_txt_records, DnsService,
};
use super::types::{DomainName, RecordType, ResolutionResult};
use crate::config::Config;
use crate::error_handling::NetworkError;
use crate::geoip::{GeolocationService, GeolocationStatus};

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub domain: DomainName,
    pub result: ResolutionResult,
    pub geolocation: GeolocationStatus,
}

/// Resolves domains against the configured DNS and geolocation services.
#[derive(Debug, Clone)]
pub struct Resolver {
    dns: DnsService,
    geolocation: GeolocationService,
}

impl Resolver {
    pub fn new(dns: DnsService, geolocation: GeolocationService) -> Self {
        Self { dns, geolocation }
    }

    /// Builds a resolver that shares `client` between both services.
    pub fn from_config(client: Arc<Client>, config: &Config) -> Self {
        Self::new(
            DnsService::new(Arc::clone(&client), config.dns_endpoint.clone()),
            GeolocationService::new(client, config.geolocation_endpoint.clone()),
        )
    }

    /// Scans `domain`.
    ///
    /// # Returns
    ///
    /// All four record sets (each possibly empty) plus the geolocation
    /// outcome. `result.location` is set only when the geolocation status is
    /// [`GeolocationStatus::Located`].
    ///
    /// # Errors
    ///
    /// Returns the first `NetworkError` among the four primary lookups. No
    /// partial result is returned in that case.
    pub async fn resolve(&self, domain: &DomainName) -> Result<ScanOutcome, NetworkError> {
        info!("Scanning {domain} via {}", self.dns.endpoint());

        let (addresses_v4, addresses_v6, mail_exchanges, text_records) = futures::try_join!(
            lookup_address_records(&self.dns, domain, RecordType::A),
            lookup_address_records(&self.dns, domain, RecordType::Aaaa),
            lookup_mx_records(&self.dns, domain),
            lookup_txt_records(&self.dns, domain),
        )?;

        let mut result = ResolutionResult {
            addresses_v4,
            addresses_v6,
            mail_exchanges,
            text_records,
            location: None,
        };

        let geolocation = match result.addresses_v4.first().cloned() {
            None => {
                debug!("No IPv4 address for {domain}, skipping geolocation");
                GeolocationStatus::Skipped
            }
            Some(ip) => match self.geolocation.lookup_ip(&ip).await {
                Ok(location) => {
                    result.location = Some(location);
                    GeolocationStatus::Located
                }
                Err(e) => {
                    warn!("Geolocation for {domain} unavailable: {e}");
                    GeolocationStatus::Failed(e.to_string())
                }
            },
        };

        info!(
            "Scan of {domain} finished: {} record(s), geolocation {:?}",
            result.record_count(),
            geolocation
        );

        Ok(ScanOutcome {
            domain: domain.clone(),
            result,
            geolocation,
        })
    }
}
