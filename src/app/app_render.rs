use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::theme;

const TITLE: &str = "Pet-Safe Flower Checker";
const SUBTITLE: &str = "Quickly check whether flowers are safe for cats and dogs.";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        render_header(frame, layout[0]);
        crate::input::input_render::render_field(self, frame, layout[1]);
        crate::suggestions::suggestion_render::render_pills(&self.suggestions, frame, layout[2]);
        crate::results::results_render::render_pane(self, frame, layout[3]);
        crate::recent::recent_render::render_line(&self.recent, frame, layout[4]);
        crate::help::help_line_render::render_line(self, frame, layout[5]);

        render_notification(frame, &mut self.notification);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(" ❀ ", Style::default().fg(theme::header::ICON)),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(theme::header::TITLE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", SUBTITLE),
            Style::default().fg(theme::header::SUBTITLE),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
