//! Shared test utilities for flowercheck

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crate::app::App;
    use crate::check::{CheckRequest, CheckResponse, Verdict};
    use crate::recent::{MemoryStore, RECENT_KEY, RecentChecksCache};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// App with an empty in-memory recent list and no worker
    pub fn test_app() -> App {
        App::new(RecentChecksCache::in_memory())
    }

    /// App with in-memory recent entries already stored
    pub fn app_with_recent(entries: &[&str]) -> App {
        let json = serde_json::to_string(entries).unwrap();
        let store = MemoryStore::new().with_entry(RECENT_KEY, &json);
        App::new(RecentChecksCache::load(Box::new(store)))
    }

    /// App wired to channels the test drives in place of the worker thread
    pub fn connected_app() -> (App, Receiver<CheckRequest>, Sender<CheckResponse>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = test_app();
        app.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn verdict(flower: &str, verified: bool) -> Verdict {
        Verdict {
            flower: flower.to_string(),
            verified,
            message: if verified { "Safe" } else { "Toxic" }.to_string(),
            note: (!verified).then(|| "Contact a vet".to_string()),
            source: if verified { "database" } else { "llm" }.to_string(),
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
