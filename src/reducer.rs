//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::{Effect, WeatherQuery};
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Location actions =====
        Action::LocationDetect => detect_location(state),

        Action::LocationDidResolve(coordinates) => {
            state.coordinates = Some(coordinates);
            // A city search submitted while locating takes precedence
            if !std::mem::take(&mut state.locating) {
                return DispatchResult::changed();
            }
            let request = state.next_request();
            DispatchResult::changed_with(Effect::FetchWeather {
                request,
                query: WeatherQuery::Coordinates(coordinates),
            })
        }

        Action::LocationDidError(error) => {
            state.locating = false;
            state.error = Some(error);
            state.city = None;
            state.weather = None;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherFetchHere => match state.coordinates {
            Some(coordinates) => {
                let request = state.next_request();
                DispatchResult::changed_with(Effect::FetchWeather {
                    request,
                    query: WeatherQuery::Coordinates(coordinates),
                })
            }
            None => detect_location(state),
        },

        Action::WeatherDidLoad { request, weather } => {
            if !state.is_current(request) {
                return DispatchResult::unchanged();
            }
            state.in_flight = None;
            state.city = Some(weather.city.clone());
            state.query = weather.city.clone();
            state.error = None;
            state.weather = Some(weather);
            DispatchResult::changed()
        }

        Action::WeatherDidError {
            request,
            error,
            city,
        } => {
            if !state.is_current(request) {
                return DispatchResult::unchanged();
            }
            state.in_flight = None;
            state.error = Some(error);
            state.city = city;
            state.weather = None;
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(query) => {
            let city = query.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.query = city.clone();
            state.locating = false;
            let request = state.next_request();
            DispatchResult::changed_with(Effect::FetchWeather {
                request,
                query: WeatherQuery::City(city),
            })
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Value-returning form of [`reducer`]: the input state is left untouched.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    reducer(&mut next, action);
    next
}

fn detect_location(state: &mut AppState) -> DispatchResult<Effect> {
    state.locating = true;
    DispatchResult::changed_with(Effect::DetectLocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Coordinates, LookupError, Temperature, WeatherData};

    fn weather(city: &str) -> WeatherData {
        WeatherData {
            temperature: Temperature::from_kelvin(300.9),
            description: "light rain".into(),
            icon: "10d".into(),
            icon_url: "http://openweathermap.org/img/w/10d.png".into(),
            city: city.into(),
            country: "GB".into(),
        }
    }

    fn not_found() -> LookupError {
        LookupError::Status {
            status: 404,
            status_text: "Not Found".into(),
        }
    }

    #[test]
    fn test_location_detect_declares_effect() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::LocationDetect);

        assert!(result.changed);
        assert!(state.locating);
        assert_eq!(result.effects, vec![Effect::DetectLocation]);
    }

    #[test]
    fn test_location_resolve_keeps_error_and_weather() {
        let coords = Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        };
        let mut state = AppState {
            error: Some(not_found()),
            locating: true,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::LocationDidResolve(coords));

        assert_eq!(state.coordinates, Some(coords));
        assert_eq!(state.error, Some(not_found()));
        assert!(state.weather.is_none());
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request: 1,
                query: WeatherQuery::Coordinates(coords),
            }]
        );
    }

    #[test]
    fn test_search_during_locate_keeps_city_result() {
        let coords = Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        };
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationDetect);
        reducer(&mut state, Action::SearchSubmit("Oslo".into()));
        let search = state.request_seq;

        let result = reducer(&mut state, Action::LocationDidResolve(coords));

        assert!(result.effects.is_empty());
        assert_eq!(state.coordinates, Some(coords));
        assert!(state.is_current(search));
        assert!(!state.locating);
    }

    #[test]
    fn test_fetch_here_without_coordinates_detects_first() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::WeatherFetchHere);

        assert_eq!(result.effects, vec![Effect::DetectLocation]);
        assert_eq!(state.request_seq, 0);
    }

    #[test]
    fn test_weather_load_clears_error_and_sets_city() {
        let mut state = AppState {
            error: Some(not_found()),
            ..Default::default()
        };
        let request = state.next_request();

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request,
                weather: weather("London"),
            },
        );

        assert!(result.changed);
        assert!(state.error.is_none());
        assert_eq!(state.weather, Some(weather("London")));
        assert_eq!(state.city.as_deref(), Some("London"));
        assert_eq!(state.query, "London");
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut state = AppState::default();
        let stale = state.next_request();
        let fresh = state.next_request();

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: stale,
                weather: weather("Paris"),
            },
        );
        assert!(!result.changed);
        assert!(state.weather.is_none());
        assert_eq!(state.in_flight, Some(fresh));

        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                request: stale,
                error: not_found(),
                city: None,
            },
        );
        assert!(!result.changed);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchSubmit("   ".into()));

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.request_seq, 0);
    }

    #[test]
    fn test_submit_trims_city() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchSubmit("  Oslo ".into()));

        assert_eq!(state.query, "Oslo");
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request: 1,
                query: WeatherQuery::City("Oslo".into()),
            }]
        );
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = AppState::default();

        let next = reduce(&state, Action::SearchQueryChange("Rome".into()));

        assert_eq!(state.query, "");
        assert_eq!(next.query, "Rome");
    }
}
