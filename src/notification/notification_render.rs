//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after rendering the main UI so the notification appears on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let style = notif.severity().style();

    let frame_area = frame.area();
    let margin = 2;
    // Padding (1 char each side) + borders (2)
    let chrome = 4;

    let max_text_width = usize::from(frame_area.width.saturating_sub(margin * 2 + chrome));
    let text = notif.fitted_text(max_text_width);
    let text_width = u16::try_from(Span::raw(text.as_ref()).width()).unwrap_or(u16::MAX);

    let notification_width = text_width.saturating_add(chrome);
    let notification_height = 3;

    let notification_area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width.saturating_add(margin)),
        y: margin,
        width: notification_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    popup::clear_area(frame, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", text),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}
