//! Geolocation/ASN lookup client.

use serde::Deserialize;

/// Client for the IP geolocation service.
///
/// The service exposes per-IP JSON records at `<base>/<ip>/json/`;
/// only the autonomous-system field is consumed.
pub struct GeoClient {
    client: reqwest::Client,
    base_url: String,
}

/// Lookup record. Everything but the ASN is ignored.
#[derive(Debug, Deserialize)]
struct GeoRecord {
    asn: Option<String>,
}

impl GeoClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Look up the ASN for an IP address.
    ///
    /// Returns `Ok(None)` when the service answers with a non-success
    /// status or the record carries no ASN; transport and decode
    /// failures surface as errors. Callers treat all three the same
    /// way (deny), but the distinction is kept for logging.
    pub async fn asn(&self, ip: &str) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/{}/json/", self.base_url.trim_end_matches('/'), ip);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let record: GeoRecord = response.json().await?;
        Ok(record.asn)
    }
}
