use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.check.is_loading() {
        hints!["Esc/Ctrl+C" => "Quit"]
    } else if app.suggestions.selected().is_some() {
        hints!["Enter" => "Check Selected", "Tab/Shift+Tab" => "Move", "Esc" => "Clear Selection", "Ctrl+C" => "Quit"]
    } else {
        hints!["Enter" => "Check", "Tab" => "Suggestions", "Ctrl+P/N" => "Recent", "Esc/Ctrl+C" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{connected_app, test_app};

    fn hint_keys(app: &App) -> Vec<&'static str> {
        get_context_hints(app).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_idle_hints() {
        let app = test_app();
        assert_eq!(hint_keys(&app), vec!["Enter", "Tab", "Ctrl+P/N", "Esc/Ctrl+C"]);
    }

    #[test]
    fn test_selected_suggestion_hints() {
        let mut app = test_app();
        app.suggestions.select_next();
        assert_eq!(get_context_hints(&app)[0], ("Enter", "Check Selected"));
    }

    #[test]
    fn test_loading_hints_only_quit() {
        let (mut app, _requests, _responses) = connected_app();
        app.submit("Roses");
        assert_eq!(hint_keys(&app), vec!["Esc/Ctrl+C"]);
    }

    #[test]
    fn test_spans_are_separated_by_bullets() {
        let spans = build_styled_spans(&[("A", "One"), ("B", "Two")]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " A One \u{2022} B Two");
    }
}
