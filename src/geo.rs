//! Single-shot geolocation

use serde::Deserialize;

use crate::state::{Coordinates, LookupError};

pub const DEFAULT_GEO_URL: &str = "http://ip-api.com/json";

/// Where the current position comes from
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSource {
    /// Coordinates given up front; no lookup needed
    Fixed(Coordinates),
    /// IP-based lookup against `url`
    IpLookup { url: String },
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Geolocator {
    http: reqwest::Client,
    source: LocationSource,
}

impl Geolocator {
    pub fn new(http: reqwest::Client, source: LocationSource) -> Self {
        Self { http, source }
    }

    pub fn source(&self) -> &LocationSource {
        &self.source
    }

    /// Resolve the current position. Every failure is a `Geolocation` error.
    pub async fn locate(&self) -> Result<Coordinates, LookupError> {
        match &self.source {
            LocationSource::Fixed(coords) => Ok(*coords),
            LocationSource::IpLookup { url } => self.ip_lookup(url).await,
        }
    }

    async fn ip_lookup(&self, url: &str) -> Result<Coordinates, LookupError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Geolocation(e.to_string()))?
            .error_for_status()
            .map_err(|e| LookupError::Geolocation(e.to_string()))?;

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Geolocation(e.to_string()))?;

        coordinates_from_response(body)
    }
}

fn coordinates_from_response(body: IpLookupResponse) -> Result<Coordinates, LookupError> {
    if body.status != "success" {
        let reason = body.message.unwrap_or(body.status);
        return Err(LookupError::Geolocation(reason));
    }
    match (body.lat, body.lon) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        _ => Err(LookupError::Geolocation(
            "lookup returned no coordinates".into(),
        )),
    }
}
