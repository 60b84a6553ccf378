//! OpenWeatherMap current-weather client

use serde::Deserialize;

use crate::effect::WeatherQuery;
use crate::state::{LookupError, Temperature, WeatherData};

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const ICON_URL_BASE: &str = "http://openweathermap.org/img/w";

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainReadings,
    weather: Vec<Condition>,
    name: String,
    sys: CountryInfo,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    /// Kelvin
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct CountryInfo {
    country: String,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Network(err.to_string())
        }
    }
}

pub fn icon_url(icon: &str) -> String {
    format!("{}/{}.png", ICON_URL_BASE, icon)
}

fn weather_from_response(data: WeatherResponse) -> Result<WeatherData, LookupError> {
    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Decode("no weather conditions in response".into()))?;

    Ok(WeatherData {
        temperature: Temperature::from_kelvin(data.main.temp),
        description: condition.description,
        icon_url: icon_url(&condition.icon),
        icon: condition.icon,
        city: data.name,
        country: data.sys.country,
    })
}

/// Turn a non-2xx status into the error shown to the user.
pub fn status_error(status: reqwest::StatusCode) -> LookupError {
    LookupError::Status {
        status: status.as_u16(),
        status_text: status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
    }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn query_params(&self, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        let mut params = match query {
            WeatherQuery::Coordinates(coords) => vec![
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ],
            WeatherQuery::City(name) => vec![("q", name.clone())],
        };
        params.push(("appid", self.api_key.clone()));
        params
    }

    /// Fetch current conditions for a place
    pub async fn current(&self, query: &WeatherQuery) -> Result<WeatherData, LookupError> {
        tracing::debug!(?query, "requesting current weather");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, ?query, "weather provider rejected request");
            return Err(status_error(status));
        }

        let data: WeatherResponse = response.json().await?;
        weather_from_response(data)
    }
}
