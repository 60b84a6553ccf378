//! Render tests using RenderHarness

use tui_dispatch::testing::*;
use weather_lookup::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    state::{AppState, Coordinates, LookupError, Temperature, WeatherData},
};

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay::default();
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn rainy_london() -> WeatherData {
    WeatherData {
        temperature: Temperature::from_kelvin(285.2),
        description: "moderate rain".into(),
        icon: "10n".into(),
        icon_url: "http://openweathermap.org/img/w/10n.png".into(),
        city: "London".into(),
        country: "GB".into(),
    }
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default(), 60, 20);

    assert!(output.contains("Weather Info"), "Should show title");
    assert!(output.contains("Enter the city"), "Should show placeholder");
    assert!(output.contains("Type a city"), "Should show fetch prompt");
}

#[test]
fn test_render_locating() {
    let state = AppState {
        locating: true,
        ..Default::default()
    };

    let output = render(&state, 60, 20);

    assert!(output.contains("locating..."));
    assert!(output.contains("Loading..."));
}

#[test]
fn test_render_weather() {
    let state = AppState {
        weather: Some(rainy_london()),
        city: Some("London".into()),
        query: "London".into(),
        ..Default::default()
    };

    let output = render(&state, 60, 20);

    // Temperature is FIGlet art; the text rows are plain
    assert!(output.contains("moderate rain"), "Should show description");
    assert!(output.contains("London, GB"), "Should show place");
}

#[test]
fn test_render_status_error() {
    let state = AppState {
        error: Some(LookupError::Status {
            status: 404,
            status_text: "Not Found".into(),
        }),
        city: Some("Gondor".into()),
        ..Default::default()
    };

    let output = render(&state, 60, 20);

    assert!(output.contains("Error"), "Should show error label");
    assert!(output.contains("404, Not Found"), "Should show status");
    assert!(output.contains("Gondor"), "Should show the searched city");
    assert!(
        output.contains("Press enter to retry"),
        "City search retries from the input"
    );
}

#[test]
fn test_render_geolocation_error() {
    let state = AppState {
        error: Some(LookupError::Geolocation("permission denied".into())),
        ..Default::default()
    };

    let output = render(&state, 60, 20);

    assert!(output.contains("permission denied"));
    assert!(!output.contains("while looking up"));
    assert!(output.contains("Press ctrl+l to retry"));
    assert!(!output.contains("Press enter to retry"));
}

#[test]
fn test_render_coordinate_lookup_error_offers_location_retry() {
    let state = AppState {
        error: Some(LookupError::Network("timed out".into())),
        query: "London".into(),
        coordinates: Some(Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        }),
        ..Default::default()
    };

    let output = render(&state, 60, 20);

    assert!(output.contains("Press ctrl+l to retry"));
    assert!(!output.contains("Press enter to retry"));
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("my location"), "Should show location hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_small_terminal() {
    let state = AppState {
        weather: Some(rainy_london()),
        ..Default::default()
    };

    let output = render(&state, 30, 8);

    assert!(!output.is_empty(), "Should render something");
}
