use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::notification::Severity;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_check_response();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.input.insert_paste(&text);
                    self.on_input_changed();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Any key acknowledges a permanent error notification
        if self
            .notification
            .current()
            .is_some_and(|n| n.severity() == Severity::Error)
        {
            self.notification.dismiss();
            self.mark_dirty();
        }

        if handle_global_keys(self, key) {
            return;
        }

        match key.code {
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Tab => {
                self.suggestions.select_next();
                self.mark_dirty();
            }
            KeyCode::BackTab => {
                self.suggestions.select_previous();
                self.mark_dirty();
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.recall_previous();
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.recall_next();
            }
            _ => {
                if self.input.textarea.input(key) {
                    self.on_input_changed();
                } else {
                    // Cursor movement still needs a redraw
                    self.mark_dirty();
                }
            }
        }
    }
}

/// Quit keys. Returns true if the key was handled.
fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Esc => {
            if app.suggestions.selected().is_some() {
                app.suggestions.clear_selection();
                app.mark_dirty();
            } else {
                app.should_quit = true;
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
