//! DNS record queries (A, AAAA, MX, TXT) over DNS-over-HTTPS.
//!
//! Each query is a single HTTP GET against a JSON resolver endpoint. There is
//! no retry: any transport, status or decoding failure is returned as a
//! [`NetworkError`] naming the record type that failed.

use std::sync::Arc;

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::extract::{extract_addresses, extract_mx_records, extract_txt_records};
use super::types::{DohResponse, DomainName, MxRecord, RecordType};
use crate::config::DNS_JSON_MEDIA_TYPE;
use crate::error_handling::NetworkError;

/// Client for a DNS-over-HTTPS JSON endpoint.
#[derive(Debug, Clone)]
pub struct DnsService {
    client: Arc<Client>,
    endpoint: String,
}

impl DnsService {
    pub fn new(client: Arc<Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one query and decodes the raw response.
    ///
    /// A non-zero DNS status (e.g. NXDOMAIN) is not an error; the answer
    /// section is simply empty.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails, the service answers with
    /// a non-success HTTP status, or the body is not valid JSON.
    pub async fn query(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<DohResponse, NetworkError> {
        let transport = |source: reqwest::Error| NetworkError::Transport {
            domain: domain.to_string(),
            record_type,
            source,
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, DNS_JSON_MEDIA_TYPE)
            .query(&[("name", domain.as_str()), ("type", record_type.mnemonic())])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                domain: domain.to_string(),
                record_type,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let parsed: DohResponse =
            serde_json::from_slice(&body).map_err(|source| NetworkError::Decode {
                domain: domain.to_string(),
                record_type,
                source,
            })?;

        if parsed.status != 0 {
            debug!(
                "{record_type} lookup for {domain} returned DNS status {}",
                parsed.status
            );
        }
        debug!(
            "{record_type} lookup for {domain}: {} answer(s)",
            parsed.answer.len()
        );
        Ok(parsed)
    }
}

/// Queries A or AAAA records for a domain.
///
/// # Returns
///
/// The addresses in answer order; an empty vector if the domain has none.
pub async fn lookup_address_records(
    dns: &DnsService,
    domain: &DomainName,
    record_type: RecordType,
) -> Result<Vec<String>, NetworkError> {
    let response = dns.query(domain, record_type).await?;
    Ok(extract_addresses(&response, record_type))
}

/// Queries MX (mail exchanger) records for a domain.
///
/// Records keep the order the service returned them in.
pub async fn lookup_mx_records(
    dns: &DnsService,
    domain: &DomainName,
) -> Result<Vec<MxRecord>, NetworkError> {
    let response = dns.query(domain, RecordType::Mx).await?;
    Ok(extract_mx_records(&response))
}

/// Queries TXT (text) records for a domain, with quotes stripped.
pub async fn lookup_txt_records(
    dns: &DnsService,
    domain: &DomainName,
) -> Result<Vec<String>, NetworkError> {
    let response = dns.query(domain, RecordType::Txt).await?;
    Ok(extract_txt_records(&response))
}
