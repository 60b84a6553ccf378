//! Runtime configuration shared by the effect handler

use std::time::Duration;

use crate::api::{WeatherClient, DEFAULT_WEATHER_URL};
use crate::geo::{Geolocator, LocationSource, DEFAULT_GEO_URL};
use crate::state::Coordinates;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub weather_url: String,
    pub location: LocationSource,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            location: LocationSource::IpLookup {
                url: DEFAULT_GEO_URL.to_string(),
            },
        }
    }

    pub fn with_weather_url(mut self, url: impl Into<String>) -> Self {
        self.weather_url = url.into();
        self
    }

    pub fn with_location(mut self, location: LocationSource) -> Self {
        self.location = location;
        self
    }

    /// Build the HTTP-backed services this config describes.
    pub fn services(&self) -> Result<Services, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("weather-lookup/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Services {
            weather: WeatherClient::new(http.clone(), &self.weather_url, &self.api_key),
            locator: Geolocator::new(http, self.location.clone()),
        })
    }
}

/// Pick the location source from optional fixed coordinates.
pub fn location_source(lat: Option<f64>, lon: Option<f64>, geo_url: &str) -> LocationSource {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => LocationSource::Fixed(Coordinates {
            latitude,
            longitude,
        }),
        _ => LocationSource::IpLookup {
            url: geo_url.to_string(),
        },
    }
}

/// Clients the effect handler runs requests through
#[derive(Debug, Clone)]
pub struct Services {
    pub weather: WeatherClient,
    pub locator: Geolocator,
}
