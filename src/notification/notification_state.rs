//! What the overlay is currently telling the user

use ratatui::style::Color;
use ratatui::text::Span;
use std::borrow::Cow;
use std::time::{Duration, Instant};

use crate::theme;

const ELLIPSIS: char = '…';

/// Everything the app ever pops up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A submit arrived while this flower was still being checked
    AlreadyChecking(String),
    /// The config file could not be used; defaults are in effect
    ConfigProblem(String),
    /// The network worker died, so later checks fail until restart
    WorkerStopped(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::AlreadyChecking(_) => Severity::Info,
            Notice::ConfigProblem(_) => Severity::Warning,
            Notice::WorkerStopped(_) => Severity::Error,
        }
    }

    fn text(&self) -> String {
        match self {
            Notice::AlreadyChecking(flower) => format!("Already checking {}...", flower),
            Notice::ConfigProblem(warning) => warning.clone(),
            Notice::WorkerStopped(reason) => format!("Network worker stopped: {}", reason),
        }
    }

    /// None keeps it up until a key is pressed
    fn lifetime(&self) -> Option<Duration> {
        match self.severity() {
            Severity::Info => Some(Duration::from_millis(1500)),
            Severity::Warning => Some(Duration::from_secs(10)),
            Severity::Error => None,
        }
    }
}

impl Severity {
    pub fn style(self) -> NotificationStyle {
        match self {
            Severity::Info => NotificationStyle {
                fg: theme::notification::INFO_FG,
                bg: theme::notification::INFO_BG,
                border: theme::notification::INFO_BORDER,
            },
            Severity::Warning => NotificationStyle {
                fg: theme::notification::WARNING_FG,
                bg: theme::notification::WARNING_BG,
                border: theme::notification::WARNING_BORDER,
            },
            Severity::Error => NotificationStyle {
                fg: theme::notification::ERROR_FG,
                bg: theme::notification::ERROR_BG,
                border: theme::notification::ERROR_BORDER,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    notice: Notice,
    text: String,
    shown_at: Instant,
}

impl Notification {
    fn new(notice: Notice) -> Self {
        Self {
            text: notice.text(),
            notice,
            shown_at: Instant::now(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.notice.severity()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn expired_at(&self, now: Instant) -> bool {
        self.notice
            .lifetime()
            .is_some_and(|lifetime| now.duration_since(self.shown_at) > lifetime)
    }

    /// The text cut to at most `max_width` terminal columns, ending in an
    /// ellipsis when shortened. Width counts wide glyphs as two columns.
    pub fn fitted_text(&self, max_width: usize) -> Cow<'_, str> {
        if Span::raw(self.text.as_str()).width() <= max_width {
            return Cow::Borrowed(&self.text);
        }
        if max_width == 0 {
            return Cow::Owned(String::new());
        }

        let budget = max_width - 1;
        let mut used = 0;
        let mut fitted = String::new();
        for (idx, ch) in self.text.char_indices() {
            let width = Span::raw(&self.text[idx..idx + ch.len_utf8()]).width();
            if used + width > budget {
                break;
            }
            used += width;
            fitted.push(ch);
        }
        fitted.push(ELLIPSIS);
        Cow::Owned(fitted)
    }
}

/// At most one notification is shown; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, notice: Notice) {
        self.current = Some(Notification::new(notice));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        self.clear_if_expired_at(Instant::now())
    }

    fn clear_if_expired_at(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text_and_severity() {
        let busy = Notice::AlreadyChecking("Roses".to_string());
        assert_eq!(busy.text(), "Already checking Roses...");
        assert_eq!(busy.severity(), Severity::Info);

        let stopped = Notice::WorkerStopped("boom".to_string());
        assert_eq!(stopped.text(), "Network worker stopped: boom");
        assert_eq!(stopped.severity(), Severity::Error);

        let config = Notice::ConfigProblem("Invalid config: bad".to_string());
        assert_eq!(config.text(), "Invalid config: bad");
        assert_eq!(config.severity().style().bg, theme::notification::WARNING_BG);
    }

    #[test]
    fn test_already_checking_expires_quickly() {
        let mut state = NotificationState::new();
        state.raise(Notice::AlreadyChecking("Roses".to_string()));
        let shown_at = state.current().unwrap().shown_at;

        assert!(!state.clear_if_expired_at(shown_at + Duration::from_millis(1000)));
        assert!(state.clear_if_expired_at(shown_at + Duration::from_millis(1600)));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_config_problem_outlives_info() {
        let mut state = NotificationState::new();
        state.raise(Notice::ConfigProblem("Invalid config".to_string()));
        let shown_at = state.current().unwrap().shown_at;

        assert!(!state.clear_if_expired_at(shown_at + Duration::from_secs(5)));
        assert!(state.clear_if_expired_at(shown_at + Duration::from_secs(11)));
    }

    #[test]
    fn test_worker_stopped_stays_until_dismissed() {
        let mut state = NotificationState::new();
        state.raise(Notice::WorkerStopped("boom".to_string()));
        let shown_at = state.current().unwrap().shown_at;

        assert!(!state.clear_if_expired_at(shown_at + Duration::from_secs(3600)));
        state.dismiss();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_new_notice_replaces_current() {
        let mut state = NotificationState::new();
        state.raise(Notice::AlreadyChecking("Roses".to_string()));
        state.raise(Notice::AlreadyChecking("Tulip".to_string()));
        assert_eq!(
            state.current().map(Notification::text),
            Some("Already checking Tulip...")
        );
    }

    #[test]
    fn test_fitted_text_keeps_short_text() {
        let notif = Notification::new(Notice::AlreadyChecking("Roses".to_string()));
        assert!(matches!(notif.fitted_text(80), Cow::Borrowed(_)));
        assert_eq!(notif.fitted_text(80), "Already checking Roses...");
    }

    #[test]
    fn test_fitted_text_truncates_long_name() {
        let notif = Notification::new(Notice::AlreadyChecking("a".repeat(65_515)));
        let fitted = notif.fitted_text(30);

        assert_eq!(Span::raw(fitted.as_ref()).width(), 30);
        assert!(fitted.starts_with("Already checking aaaa"));
        assert!(fitted.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_fitted_text_counts_wide_glyphs_as_two_columns() {
        let notif = Notification::new(Notice::AlreadyChecking("向日葵向日葵".to_string()));

        // "Already checking " is 17 columns, one glyph takes two more
        assert_eq!(notif.fitted_text(20), "Already checking 向…");
        assert_eq!(notif.fitted_text(21), "Already checking 向…");
    }

    #[test]
    fn test_fitted_text_zero_width() {
        let notif = Notification::new(Notice::WorkerStopped("boom".to_string()));
        assert_eq!(notif.fitted_text(0), "");
    }
}
