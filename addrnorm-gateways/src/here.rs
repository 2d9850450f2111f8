//! Address normalization with the HERE Geocoding & Search API.

use addrnorm_core::gateways::geocode::GeoCodingGateway;
use addrnorm_entities::address::{AddressComponents, NormalizedAddress};
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://geocode.search.hereapi.com/v1/geocode";

// Only the best candidate is of interest.
const RESULT_LIMIT: &str = "1";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty address")]
    EmptyAddress,
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),
}

/// A client for the geocoding endpoint.
///
/// Endpoint, credential and timeout are fixed at construction.
#[derive(Clone)]
pub struct HereGeocoder {
    client: Client,
    api_url: String,
    api_key: String,
}

// Never print the API key
impl std::fmt::Debug for HereGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HereGeocoder")
            .field("api_url", &self.api_url)
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

impl HereGeocoder {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::try_new(api_key, DEFAULT_API_URL, None)
    }

    /// Without a `timeout` the default of the HTTP client applies.
    pub fn try_new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a single lookup request.
    ///
    /// Returns `Ok(None)` if the provider did not find any candidate.
    pub fn lookup(&self, address: &str) -> Result<Option<NormalizedAddress>, Error> {
        if address.trim().is_empty() {
            return Err(Error::EmptyAddress);
        }
        let query = [
            ("q", address),
            ("apiKey", self.api_key.as_str()),
            ("limit", RESULT_LIMIT),
        ];
        // The request URL contains the API key and must not end up in the logs.
        let body = self
            .client
            .get(&self.api_url)
            .query(&query)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(reqwest::Error::without_url)?;
        let response: raw::GeocodeResponse = serde_json::from_str(&body)?;
        Ok(normalized_address_from_response(address, response))
    }
}

impl GeoCodingGateway for HereGeocoder {
    fn normalize_address(&self, address: &str) -> Option<NormalizedAddress> {
        match self.lookup(address) {
            Ok(Some(normalized)) => {
                debug!(
                    "Normalized address '{address}': '{}'",
                    normalized.normalized
                );
                Some(normalized)
            }
            Ok(None) => {
                warn!("No results found for address: {address}");
                None
            }
            Err(Error::EmptyAddress) => {
                warn!("Skip empty address");
                None
            }
            Err(err @ Error::Transport(_)) => {
                error!("Failed to normalize address '{address}': {err}");
                None
            }
            Err(err @ Error::UnexpectedResponse(_)) => {
                error!("Unexpected error normalizing address '{address}': {err}");
                None
            }
        }
    }
}

fn normalized_address_from_response(
    original: &str,
    response: raw::GeocodeResponse,
) -> Option<NormalizedAddress> {
    let raw::Item {
        address,
        position,
        scoring,
    } = response.items.unwrap_or_default().into_iter().next()?;
    let (latitude, longitude) = position.map_or((None, None), |p| (p.lat, p.lng));
    let confidence = scoring.and_then(|s| s.query_score);
    Some(NormalizedAddress::from_components(
        original,
        address.into(),
        confidence,
        latitude,
        longitude,
    ))
}

mod raw {
    use super::AddressComponents;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        pub items: Option<Vec<Item>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Item {
        pub address: Address,
        pub position: Option<Position>,
        pub scoring: Option<Scoring>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Address {
        pub house_number: Option<String>,
        pub street: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub postal_code: Option<String>,
        pub country_code: Option<String>,
        pub country_name: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Position {
        pub lat: Option<f64>,
        pub lng: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Scoring {
        pub query_score: Option<f64>,
    }

    impl From<Address> for AddressComponents {
        fn from(from: Address) -> Self {
            let Address {
                house_number,
                street,
                city,
                state,
                postal_code,
                country_code,
                country_name,
            } = from;
            Self {
                house_number,
                street,
                city,
                state,
                postal_code,
                country_code,
                country_name,
            }
        }
    }
}
