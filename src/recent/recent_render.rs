use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::RecentChecksCache;
use crate::theme;

pub fn recent_line(recent: &RecentChecksCache) -> Option<Line<'static>> {
    if recent.is_empty() {
        return None;
    }

    Some(Line::from(vec![
        Span::styled(
            " Recent checks: ",
            Style::default().fg(theme::recent::LABEL),
        ),
        Span::styled(
            recent.entries().join(", "),
            Style::default().fg(theme::recent::ENTRY),
        ),
    ]))
}

/// Nothing is drawn while the list is empty
pub fn render_line(recent: &RecentChecksCache, frame: &mut Frame, area: Rect) {
    if let Some(line) = recent_line(recent) {
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_recent_has_no_line() {
        assert!(recent_line(&RecentChecksCache::in_memory()).is_none());
    }

    #[test]
    fn test_recent_line_joins_entries() {
        let mut recent = RecentChecksCache::in_memory();
        recent.record("Roses");
        recent.record("Lilies");

        let line = recent_line(&recent).unwrap();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Recent checks: Lilies, Roses");
    }
}
