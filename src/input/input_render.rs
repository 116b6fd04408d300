use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::App;
use crate::theme;

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let loading = app.check.is_loading();

    let (title, border_color) = if loading {
        (" Checking... ", theme::input::BORDER_LOADING)
    } else {
        (" Check a flower ", theme::input::BORDER_FOCUSED)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::input::TITLE)
                .add_modifier(Modifier::BOLD),
        )))
        .border_style(Style::default().fg(border_color));

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
}
