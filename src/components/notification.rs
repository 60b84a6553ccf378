use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::LookupError;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Shown in place of the weather whenever a lookup failed
pub struct Notification;

pub struct NotificationProps<'a> {
    pub error: &'a LookupError,
    pub city: Option<&'a str>,
}

impl Component<Action> for Notification {
    type Props<'a> = NotificationProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // icon
            Constraint::Length(1), // "Error"
            Constraint::Length(1), // message
            Constraint::Length(1), // city
            Constraint::Length(1), // blank
            Constraint::Length(1), // hint
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(ERROR_ICON).centered()),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(vec![Span::styled(
                    "Error",
                    Style::default().fg(Color::Red).bold(),
                )])
                .centered(),
            ),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(vec![Span::styled(
                    props.error.to_string(),
                    Style::default().fg(Color::Rgb(200, 100, 100)),
                )])
                .centered(),
            ),
            chunks[2],
        );
        if let Some(city) = props.city {
            frame.render_widget(
                Paragraph::new(
                    Line::from(vec![
                        Span::styled("while looking up ", Style::default().fg(Color::DarkGray)),
                        Span::styled(city.to_string(), Style::default().fg(Color::Gray)),
                    ])
                    .centered(),
                ),
                chunks[3],
            );
        }
        // City searches retry from the input; location lookups from ctrl+l
        let retry_key = if props.city.is_some() { "enter" } else { "ctrl+l" };
        frame.render_widget(
            Paragraph::new(
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled(retry_key, Style::default().fg(Color::Cyan).bold()),
                    Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
                ])
                .centered(),
            ),
            chunks[5],
        );
    }
}
