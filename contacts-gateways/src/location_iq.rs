use contacts_core::{entities::Address, gateways::geocode::GeoCodingGateway};
use reqwest::{blocking::Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://us1.locationiq.com/v1/search.php";

/// Forward geocoding with [LocationIQ](https://locationiq.com).
#[derive(Clone)]
pub struct LocationIq {
    api_key: String,
    api_url: String,
    client: Client,
}

impl fmt::Debug for LocationIq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationIq")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
enum Error {
    #[error("Request has been rejected ({0})")]
    Rejected(StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("No search results")]
    NoResults,
    #[error("Invalid coordinate '{0}'")]
    Coordinate(String),
}

// Coordinates are usually returned as strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    fn to_deg(&self) -> Result<f64, Error> {
        match self {
            Self::Text(s) => s.trim().parse().map_err(|_| Error::Coordinate(s.clone())),
            Self::Number(n) => Ok(*n),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: Coordinate,
    lon: Coordinate,
}

impl LocationIq {
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL.to_owned())
    }

    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            client: Client::new(),
        }
    }

    fn search(&self, query: &str) -> Result<Vec<SearchResult>, Error> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("format", "json"),
            ])
            .send()?;
        let status = response.status();
        if status.is_client_error() {
            return Err(Error::Rejected(status));
        }
        Ok(response.error_for_status()?.json()?)
    }

    fn resolve(&self, query: &str) -> Result<(f64, f64), Error> {
        let results = self.search(query)?;
        let first = results.first().ok_or(Error::NoResults)?;
        Ok((first.lat.to_deg()?, first.lon.to_deg()?))
    }
}

impl GeoCodingGateway for LocationIq {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Option<(f64, f64)> {
        let query = addr.to_single_line();
        if query.is_empty() {
            return None;
        }
        match self.resolve(&query) {
            Ok(lat_lng) => {
                log::debug!("Resolved address location '{}': {:?}", query, lat_lng);
                Some(lat_lng)
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{}': {}", query, err);
                None
            }
        }
    }
}
