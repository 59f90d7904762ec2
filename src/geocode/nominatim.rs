//! Remote tier: OpenStreetMap Nominatim.
//!
//! One outbound query per lookup, scoped to a region, asking for a single
//! candidate. The service's acceptable-use policy requires a descriptive
//! User-Agent and at most one request per second; the pacing lives in the
//! enrichment loop, not here.

use super::types::{Coordinate, RemoteError};
use serde::Deserialize;
use std::time::Duration;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str =
    "CordobaGeocoder/0.3 (https://github.com/fran1599/mapa-indicadores)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize, Debug)]
struct NominatimResult {
    lat: String,
    lon: String,
}

/// Nominatim client bound to one administrative region.
pub struct NominatimClient {
    agent: ureq::Agent,
    region: String,
    country: String,
}

impl NominatimClient {
    /// Client scoped to the province of Córdoba, Argentina.
    pub fn cordoba() -> Self {
        Self::new("Córdoba", "Argentina")
    }

    pub fn new(region: &str, country: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            region: region.to_string(),
            country: country.to_string(),
        }
    }

    /// Query Nominatim for a raw (un-normalized) place name.
    ///
    /// `Ok(None)` means the service answered but had no match. Transport
    /// failures and malformed responses come back as `RemoteError`; the
    /// caller decides how loudly to report them.
    pub fn lookup(&self, raw_name: &str) -> Result<Option<Coordinate>, RemoteError> {
        let query = format!("{}, {}, {}", raw_name, self.region, self.country);

        let response = self
            .agent
            .get(NOMINATIM_URL)
            .query("q", &query)
            .query("format", "json")
            .query("limit", "1")
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let results: Vec<NominatimResult> = response
            .into_json()
            .map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;

        let Some(first) = results.first() else {
            return Ok(None);
        };

        let lat: f64 = first
            .lat
            .parse()
            .map_err(|_| RemoteError::InvalidResponse(format!("bad lat '{}'", first.lat)))?;
        let lon: f64 = first
            .lon
            .parse()
            .map_err(|_| RemoteError::InvalidResponse(format!("bad lon '{}'", first.lon)))?;

        Ok(Some(Coordinate::new(lat, lon)))
    }
}
