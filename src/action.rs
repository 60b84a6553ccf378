//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Coordinates, LookupError, WeatherData};

/// Application actions. `infer_categories` groups the `*Did*` results into
/// `location_did` and `weather_did`; intents stay uncategorized.
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Location =====
    /// Intent: ask for the current position (triggers async task)
    LocationDetect,

    /// Result: position known
    LocationDidResolve(Coordinates),

    /// Result: position could not be determined
    LocationDidError(LookupError),

    // ===== Weather =====
    /// Intent: show weather for the current position (location button)
    WeatherFetchHere,

    /// Result: conditions loaded for `request`
    WeatherDidLoad { request: u64, weather: WeatherData },

    /// Result: lookup `request` failed; `city` is the name that was searched
    WeatherDidError {
        request: u64,
        error: LookupError,
        city: Option<String>,
    },

    // ===== Search =====
    /// City input text changed
    SearchQueryChange(String),

    /// Enter pressed in the city input
    SearchSubmit(String),

    // ===== Global =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}
