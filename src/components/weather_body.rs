use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::{AppState, WeatherData};

/// Current conditions, or a placeholder while nothing is loaded
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Rows reserved for the big temperature readout (terminus is 6 tall).
const TEMP_CAP: u16 = 6;

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Ready(weather) => render_ready(frame, area, weather),
            WeatherView::Loading => render_message(frame, area, "Loading..."),
            WeatherView::Empty => render_hint(frame, area),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, weather: &WeatherData) {
    let chunks = Layout::vertical([
        Constraint::Length(1),        // icon
        Constraint::Length(1),        // blank
        Constraint::Max(TEMP_CAP),    // temperature
        Constraint::Length(1),        // description
        Constraint::Length(1),        // place
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(icon_emoji(&weather.icon)).centered()),
        chunks[0],
    );

    let temp_text = weather.temperature.format();
    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(weather.temperature.value));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);

    let desc = Line::from(vec![Span::styled(
        weather.description.clone(),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(desc), chunks[3]);

    let place = Line::from(vec![
        Span::styled(weather.city.clone(), Style::default().bold()),
        Span::styled(", ", Style::default().fg(Color::DarkGray)),
        Span::styled(weather.country.clone(), Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(place), chunks[4]);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let msg = Line::from(vec![Span::styled(
        message,
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), row);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let hint = Line::from(vec![
        Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
        Span::styled(", or ", Style::default().fg(Color::DarkGray)),
        Span::styled("ctrl+l", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" for here", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), row);
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    Ready(&'a WeatherData),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            Some(weather) => WeatherView::Ready(weather),
            None if state.is_loading() => WeatherView::Loading,
            None => WeatherView::Empty,
        }
    }
}

/// Map a provider icon code (`01d`, `10n`, ...) to a terminal glyph.
pub fn icon_emoji(icon: &str) -> &'static str {
    match icon.get(..2) {
        Some("01") => "\u{2600}\u{fe0f}",
        Some("02") => "\u{26c5}",
        Some("03") | Some("04") => "\u{2601}\u{fe0f}",
        Some("09") => "\u{1f327}\u{fe0f}",
        Some("10") => "\u{1f326}\u{fe0f}",
        Some("11") => "\u{26c8}\u{fe0f}",
        Some("13") => "\u{2744}\u{fe0f}",
        Some("50") => "\u{1f32b}\u{fe0f}",
        _ => "\u{1f321}\u{fe0f}",
    }
}

fn temperature_gradient(celsius: i32) -> Fill {
    let (start, end) = match celsius {
        t if t < 0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
