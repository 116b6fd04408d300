use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, CheckStatus};
use crate::check::Verdict;
use crate::theme;

const SAFE_ICON: &str = "✔";
const UNSAFE_ICON: &str = "⚠";
const AI_MARKER: &str = " (AI-generated, not in the verified database)";

pub fn verdict_lines(verdict: &Verdict) -> Vec<Line<'static>> {
    let (icon, icon_color) = if verdict.verified {
        (SAFE_ICON, theme::results::SAFE)
    } else {
        (UNSAFE_ICON, theme::results::UNSAFE)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", icon),
                Style::default().fg(icon_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Result for: {}", verdict.flower),
                Style::default()
                    .fg(theme::results::MESSAGE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            verdict.message.clone(),
            Style::default().fg(theme::results::MESSAGE),
        )),
    ];

    if let Some(note) = verdict.visible_note() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            note.to_string(),
            Style::default().fg(theme::results::NOTE),
        )));
    }

    let mut source = vec![Span::styled(
        format!("Source: {}", verdict.source),
        Style::default().fg(theme::results::SOURCE),
    )];
    if verdict.is_ai_generated() {
        source.push(Span::styled(
            AI_MARKER,
            Style::default()
                .fg(theme::results::AI_MARKER)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(source));

    lines
}

pub fn render_pane(app: &App, frame: &mut Frame, area: Rect) {
    let (title, border_color) = match app.check.status {
        CheckStatus::Failed(_) => (" Error ", theme::results::ERROR_BORDER),
        _ => (" Result ", theme::results::BORDER),
    };

    let lines = match &app.check.status {
        CheckStatus::Idle => vec![Line::from(Span::styled(
            "Type a flower name and press Enter, or pick a suggestion with Tab.",
            Style::default().fg(theme::results::IDLE),
        ))],
        CheckStatus::Checking { flower, .. } => vec![Line::from(Span::styled(
            format!("Checking {}...", flower),
            Style::default().fg(theme::results::LOADING),
        ))],
        CheckStatus::Succeeded(verdict) => verdict_lines(verdict),
        CheckStatus::Failed(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme::results::ERROR_FG),
        ))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
