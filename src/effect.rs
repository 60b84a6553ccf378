//! Effects - side effects declared by the reducer

use crate::state::Coordinates;

/// What to ask the weather provider for
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    Coordinates(Coordinates),
    City(String),
}

impl WeatherQuery {
    /// City context attached to a failure of this query
    pub fn city(&self) -> Option<String> {
        match self {
            WeatherQuery::City(name) => Some(name.clone()),
            WeatherQuery::Coordinates(_) => None,
        }
    }
}

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve the current position once
    DetectLocation,
    /// Fetch current conditions; the result is tagged with `request`
    FetchWeather { request: u64, query: WeatherQuery },
}
