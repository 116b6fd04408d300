use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Blank out `area` so an overlay does not mix with what is underneath
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
