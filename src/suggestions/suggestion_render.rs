use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::SuggestionState;
use crate::theme;

pub fn pill_spans(state: &SuggestionState) -> Vec<Span<'static>> {
    if state.items().is_empty() {
        return vec![Span::styled(
            " No suggestions match",
            Style::default().fg(theme::suggestions::EMPTY),
        )];
    }

    let pill_style = Style::default()
        .fg(theme::suggestions::PILL)
        .bg(theme::suggestions::PILL_BG);
    let selected_style = Style::default()
        .fg(theme::suggestions::SELECTED_FG)
        .bg(theme::suggestions::SELECTED_BG)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(state.items().len() * 2 + 1);
    spans.push(Span::raw(" "));

    for (i, name) in state.items().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if state.selected_index() == Some(i) {
            selected_style
        } else {
            pill_style
        };
        spans.push(Span::styled(format!(" {} ", name), style));
    }

    spans
}

pub fn render_pills(state: &SuggestionState, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(pill_spans(state))).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_all_pills_rendered() {
        let state = SuggestionState::new();
        let rendered = text(&pill_spans(&state));
        assert!(rendered.contains(" Roses "));
        assert!(rendered.contains(" Lisianthus "));
    }

    #[test]
    fn test_selected_pill_is_highlighted() {
        let mut state = SuggestionState::new();
        state.select_next();

        let spans = pill_spans(&state);
        let roses = spans.iter().find(|s| s.content == " Roses ").unwrap();
        assert_eq!(roses.style.bg, Some(theme::suggestions::SELECTED_BG));

        let lilies = spans.iter().find(|s| s.content == " Lilies ").unwrap();
        assert_eq!(lilies.style.bg, Some(theme::suggestions::PILL_BG));
    }

    #[test]
    fn test_empty_state_message() {
        let mut state = SuggestionState::new();
        state.update("qqqq");
        assert_eq!(text(&pill_spans(&state)), " No suggestions match");
    }
}
