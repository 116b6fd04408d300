//! Notification module for flowercheck
//!
//! Displays transient messages (config warnings, ignored submits, worker
//! failures) on top of the main UI.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notice, Notification, NotificationState, Severity};
