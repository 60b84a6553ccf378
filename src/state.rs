//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The weather API reports Kelvin; the display offset is a whole 273.
pub const KELVIN_OFFSET: f64 = 273.0;

/// Coordinates reported by geolocation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Temperature unit label. Only Celsius is ever displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
}

impl TempUnit {
    pub fn label(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "celsius",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Temperature {
    pub value: i32,
    pub unit: TempUnit,
}

impl Temperature {
    /// Convert a Kelvin reading, truncating toward negative infinity.
    ///
    /// `300.9` becomes `27`, never `28`.
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self {
            value: (kelvin - KELVIN_OFFSET).floor() as i32,
            unit: TempUnit::Celsius,
        }
    }

    pub fn format(&self) -> String {
        format!("{}{}", self.value, self.unit.symbol())
    }
}

/// Current conditions for one place
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherData {
    pub temperature: Temperature,
    pub description: String,
    /// Provider icon code, e.g. `10d`
    pub icon: String,
    pub icon_url: String,
    pub city: String,
    pub country: String,
}

/// Everything that can go wrong during a lookup.
///
/// Lives in state and in recorded actions, so it only carries plain data.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LookupError {
    #[error("location unavailable: {0}")]
    Geolocation(String),
    #[error("{status}, {status_text}")]
    Status { status: u16, status_text: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Last position reported by geolocation; survives every lookup
    #[debug(section = "Location", label = "Coordinates", debug_fmt)]
    pub coordinates: Option<Coordinates>,

    /// City currently displayed, or the one whose lookup failed
    #[debug(section = "Location", label = "City", debug_fmt)]
    pub city: Option<String>,

    /// Never set together with `error`
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: Option<WeatherData>,

    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<LookupError>,

    // --- Request bookkeeping ---
    /// Id of the most recently issued weather request
    #[debug(section = "Requests", label = "Latest")]
    pub request_seq: u64,

    /// Outstanding weather request, if any
    #[debug(section = "Requests", label = "In flight", debug_fmt)]
    pub in_flight: Option<u64>,

    #[debug(section = "Requests", label = "Locating")]
    pub locating: bool,

    // --- Input (skipped) ---
    /// Text in the city input
    #[debug(skip)]
    pub query: String,
}

impl AppState {
    /// State for a session that starts with a city already typed in
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some() || self.locating
    }

    /// Allocate the id for a new weather request and mark it outstanding.
    pub fn next_request(&mut self) -> u64 {
        self.request_seq = self.request_seq.wrapping_add(1);
        self.in_flight = Some(self.request_seq);
        self.request_seq
    }

    /// Whether a result tagged with `request` answers the latest request.
    pub fn is_current(&self, request: u64) -> bool {
        request == self.request_seq
    }
}
