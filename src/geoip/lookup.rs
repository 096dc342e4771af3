//! IP address geolocation lookup.
//!
//! This module queries an HTTP geolocation service for the approximate
//! location of a single IP address.

use std::sync::Arc;

use log::debug;
use reqwest::Client;

use super::types::{GeoIpResponse, Location};
use crate::config::UNKNOWN_PLACE;
use crate::error_handling::GeolocationError;

/// Client for an ipapi-style geolocation endpoint (`<endpoint>/<ip>/json/`).
#[derive(Debug, Clone)]
pub struct GeolocationService {
    client: Arc<Client>,
    endpoint: String,
}

impl GeolocationService {
    pub fn new(client: Arc<Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// URL queried for `ip`.
    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}/{}/json/", self.endpoint.trim_end_matches('/'), ip)
    }

    /// Looks up the location of `ip`.
    ///
    /// # Errors
    ///
    /// Returns a `GeolocationError` if the request fails, the service answers
    /// with a non-success status or an error document, or the coordinates are
    /// missing.
    pub async fn lookup_ip(&self, ip: &str) -> Result<Location, GeolocationError> {
        let transport = |source: reqwest::Error| GeolocationError::Transport {
            ip: ip.to_string(),
            source,
        };

        let response = self
            .client
            .get(self.lookup_url(ip))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeolocationError::Status {
                ip: ip.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let parsed: GeoIpResponse =
            serde_json::from_slice(&body).map_err(|source| GeolocationError::Decode {
                ip: ip.to_string(),
                source,
            })?;

        let location = to_location(ip, parsed)?;
        debug!(
            "Located {ip} in {}, {} ({:.4}, {:.4})",
            location.city, location.country, location.latitude, location.longitude
        );
        Ok(location)
    }
}

fn to_location(ip: &str, response: GeoIpResponse) -> Result<Location, GeolocationError> {
    if response.error {
        return Err(GeolocationError::Rejected {
            ip: ip.to_string(),
            reason: response
                .reason
                .unwrap_or_else(|| "unspecified error".to_string()),
        });
    }

    let (Some(latitude), Some(longitude)) = (response.latitude, response.longitude) else {
        return Err(GeolocationError::Rejected {
            ip: ip.to_string(),
            reason: "response has no coordinates".to_string(),
        });
    };

    Ok(Location {
        latitude,
        longitude,
        city: response.city.unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
        country: response
            .country_name
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
        address: ip.to_string(),
    })
}
