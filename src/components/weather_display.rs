use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    CityBar, CityBarProps, Component, Notification, NotificationProps, WeatherBody,
    WeatherBodyProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: city bar, then either the error notification or the
/// weather body, then the key hints.
#[derive(Default)]
pub struct WeatherDisplay {
    city_bar: CityBar,
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let bar_props = CityBarProps {
            query: &props.state.query,
            is_focused: props.is_focused,
            locating: props.state.locating,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchSubmit,
        };
        self.city_bar
            .handle_event(event, bar_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(4), // City bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let state = props.state;
        self.city_bar.render(
            frame,
            chunks[0],
            CityBarProps {
                query: &state.query,
                is_focused: props.is_focused,
                locating: state.locating,
                on_query_change: Action::SearchQueryChange,
                on_query_submit: Action::SearchSubmit,
            },
        );

        match &state.error {
            Some(error) => Notification.render(
                frame,
                chunks[1],
                NotificationProps {
                    error,
                    city: state.city.as_deref(),
                },
            ),
            None => WeatherBody.render(frame, chunks[1], WeatherBodyProps { state }),
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("ctrl+l", "my location"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
